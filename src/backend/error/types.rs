/**
 * Backend Error Types
 *
 * This module defines the errors handlers return. Each variant maps onto
 * one status code of the HTTP contract:
 *
 * | Variant              | Status | Message                         |
 * |----------------------|--------|---------------------------------|
 * | `DuplicateEmail`     | 400    | User already exists             |
 * | `InvalidCredentials` | 401    | Invalid credentials             |
 * | `MissingToken`       | 401    | Unauthorized                    |
 * | `InvalidToken`       | 403    | Invalid or expired token        |
 * | `NotFound`           | 404    | caller supplied                 |
 * | `ValidationError`    | 500    | the validation failure          |
 * | `Internal`           | 500    | caller supplied, no detail      |
 *
 * Validation failures answer 500 because that is what existing clients of
 * the feedback endpoint receive.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use feedback_board::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Feedback not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Signup for an email that is already registered
    #[error("User already exists")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected request
    #[error("Unauthorized")]
    MissingToken,

    /// Bearer token that fails verification or has expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Request payload failed validation
    #[error(transparent)]
    ValidationError(#[from] SharedError),

    /// Addressed resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected storage or service fault
    ///
    /// The message is what the client sees; the cause is logged where the
    /// error is created.
    #[error("{message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ValidationError(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
