//! Feedback HTTP Handlers
//!
//! - `POST /api/feedbacks` - submit an item, 201 `{message, feedback}`
//! - `GET /api/feedbacks` - list all items, 200 `[feedback...]`
//! - `DELETE /api/feedbacks/{id}` - remove an item, 200 `{message}`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::BackendError;
use crate::shared::{Feedback, NewFeedback};

/// Response to a successful submission
#[derive(Serialize, Deserialize, Debug)]
pub struct FeedbackCreatedResponse {
    pub message: String,
    pub feedback: Feedback,
}

/// Submit a feedback item
///
/// # Errors
///
/// * `500` - The body is not a JSON object of strings, a field is empty,
///   or the store failed
pub async fn create_feedback(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewFeedback>, JsonRejection>,
) -> Result<(StatusCode, Json<FeedbackCreatedResponse>), BackendError> {
    let Json(request) = payload?;
    let feedback = db::create_feedback(&pool, &request).await.map_err(|e| {
        tracing::warn!("Error submitting feedback: {}", e);
        BackendError::from(e)
    })?;

    tracing::info!(
        id = %feedback.id,
        category = %feedback.category,
        "Feedback saved to the database"
    );

    Ok((
        StatusCode::CREATED,
        Json(FeedbackCreatedResponse {
            message: "Feedback submitted successfully".to_string(),
            feedback,
        }),
    ))
}

/// List every feedback item in submission order
pub async fn list_feedbacks(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Feedback>>, BackendError> {
    let feedbacks = db::list_feedbacks(&pool).await.map_err(|e| {
        tracing::error!("Error fetching feedbacks: {:?}", e);
        BackendError::internal("Error fetching feedbacks")
    })?;

    Ok(Json(feedbacks))
}

/// Delete a feedback item by id
///
/// An id that is not a UUID cannot name a stored item, so it is reported
/// as not found rather than as a bad request.
///
/// # Errors
///
/// * `404` - No item with this id
/// * `500` - The store failed
pub async fn delete_feedback(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = Uuid::parse_str(&id).map_err(|_| {
        tracing::warn!("Delete requested for malformed feedback id: {}", id);
        BackendError::not_found("Feedback not found")
    })?;

    let deleted = db::delete_feedback(&pool, id).await?;
    tracing::info!(id = %deleted.id, "Feedback deleted");

    Ok(Json(MessageResponse::new("Feedback deleted successfully")))
}
