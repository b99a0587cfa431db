/**
 * Database Operations for Feedback Items
 *
 * This module persists feedback items in SQLite. Rows carry an
 * autoincrementing `seq` next to the public UUID so that listing returns
 * items in the order they were submitted.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Feedback, NewFeedback, SharedError};

/// Feedback store failures
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// A required field is empty; nothing was stored
    #[error(transparent)]
    Validation(#[from] SharedError),
    /// No item with this identifier
    #[error("feedback {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    id: Uuid,
    title: String,
    category: String,
    details: String,
    created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            category: row.category,
            details: row.details,
            created_at: row.created_at,
        }
    }
}

/// Validate and store a new feedback item
///
/// # Returns
/// The stored record with its server-assigned id and creation time
pub async fn create_feedback(
    pool: &SqlitePool,
    new_feedback: &NewFeedback,
) -> Result<Feedback, FeedbackError> {
    new_feedback.validate()?;

    let feedback = Feedback {
        id: Uuid::new_v4(),
        title: new_feedback.title.clone(),
        category: new_feedback.category.clone(),
        details: new_feedback.details.clone(),
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO feedbacks (id, title, category, details, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(feedback.id)
    .bind(&feedback.title)
    .bind(&feedback.category)
    .bind(&feedback.details)
    .bind(feedback.created_at)
    .execute(pool)
    .await?;

    Ok(feedback)
}

/// Load every feedback item in insertion order
pub async fn list_feedbacks(pool: &SqlitePool) -> Result<Vec<Feedback>, sqlx::Error> {
    let rows = sqlx::query_as::<_, FeedbackRow>(
        r#"
        SELECT id, title, category, details, created_at
        FROM feedbacks
        ORDER BY seq ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Feedback::from).collect())
}

/// Remove a feedback item and return what was removed
pub async fn delete_feedback(pool: &SqlitePool, id: Uuid) -> Result<Feedback, FeedbackError> {
    let row = sqlx::query_as::<_, FeedbackRow>(
        r#"
        DELETE FROM feedbacks
        WHERE id = ?
        RETURNING id, title, category, details, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Feedback::from).ok_or(FeedbackError::NotFound(id))
}
