//! Feedback Module
//!
//! This module owns the feedback board: the `feedbacks` table and the
//! public HTTP handlers that create, list and delete items.
//!
//! The handlers are deliberately not behind the authentication gate; the
//! board is readable and writable without a session token.

pub mod db;
pub mod handlers;

pub use db::FeedbackError;
pub use handlers::{create_feedback, delete_feedback, list_feedbacks};
