//! Shared Error Types
//!
//! This module defines error types for failures that belong to the data
//! itself rather than to the server: a payload that does not satisfy the
//! invariants of the type it describes.
//!
//! # Usage
//!
//! ```rust
//! use feedback_board::shared::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Errors raised while validating shared request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field is missing or does not satisfy its invariant
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Require that a text field carries at least one non-whitespace character
    pub fn require_non_empty(field: &str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::validation(field, "is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Invalid email format");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("details", "is required");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("details"));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(SharedError::require_non_empty("title", "Crash on save").is_ok());
        assert_eq!(
            SharedError::require_non_empty("title", ""),
            Err(SharedError::validation("title", "is required"))
        );
        assert!(SharedError::require_non_empty("title", "   ").is_err());
    }
}
