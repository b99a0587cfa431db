//! Shared Module
//!
//! This module contains the types that cross the HTTP boundary: the
//! feedback records handed to the browser client and the validation errors
//! raised on incoming payloads. Nothing here touches the database or the
//! server state, so the types can be reused by any client of the API.

/// Feedback data structures
pub mod feedback;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use feedback::{Feedback, NewFeedback};
pub use error::SharedError;
