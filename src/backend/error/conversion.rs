/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses and lifts the
 * store-level errors into `BackendError`.
 *
 * # Response Format
 *
 * Error responses are JSON objects with a single field:
 * ```json
 * { "message": "Invalid credentials" }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::auth::sessions::TokenError;
use crate::backend::error::types::BackendError;
use crate::backend::feedback::db::FeedbackError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageResponse::new(self.message()))).into_response()
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Encoding(e) => {
                tracing::error!("Failed to create token: {:?}", e);
                Self::internal("Error creating session token")
            }
            _ => Self::InvalidToken,
        }
    }
}

/// Bodies the JSON extractor refuses (wrong content type, bad syntax,
/// wrong field types) answer with the usual `{"message"}` shape
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(
            "Rejected request body ({}): {}",
            rejection.status(),
            rejection.body_text()
        );
        Self::internal("Invalid request body")
    }
}

impl From<FeedbackError> for BackendError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::Validation(e) => Self::ValidationError(e),
            FeedbackError::NotFound(_) => Self::not_found("Feedback not found"),
            FeedbackError::Database(e) => {
                tracing::error!("Feedback store error: {:?}", e);
                Self::internal("Feedback store unavailable")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_response_body_is_message_only() {
        let response = BackendError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "message": "Invalid credentials" })
        );
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_cause() {
        let err: BackendError = FeedbackError::Database(sqlx::Error::PoolTimedOut).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Feedback store unavailable");
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_token_failures_become_forbidden() {
        let err: BackendError = TokenError::Expired.into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        let err: BackendError = TokenError::InvalidSignature.into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_missing_feedback_becomes_not_found() {
        let err: BackendError = FeedbackError::NotFound(uuid::Uuid::new_v4()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Feedback not found");
    }
}
