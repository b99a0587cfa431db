/**
 * Feedback Data Structures
 *
 * This module defines the feedback record returned by the API and the
 * payload accepted when a new item is submitted. Field names on the wire
 * follow what the browser client reads (`_id`, `createdAt`).
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// A stored feedback item
///
/// Records are created by the submission endpoint, listed in insertion
/// order and removed by identifier. They are never edited in place.
///
/// # Fields
/// * `id` - Server-assigned identifier, serialized as `_id`
/// * `title` - Short summary
/// * `category` - Free-form label such as "Bug" or "Feature"
/// * `details` - Body text
/// * `created_at` - Submission time, serialized as `createdAt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub details: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Submission payload for a new feedback item
///
/// Missing fields deserialize as empty strings so that they are reported
/// by [`NewFeedback::validate`] instead of by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFeedback {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub details: String,
}

impl NewFeedback {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            details: details.into(),
        }
    }

    /// Check that every required field is present
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned.
    pub fn validate(&self) -> Result<(), SharedError> {
        SharedError::require_non_empty("title", &self.title)?;
        SharedError::require_non_empty("category", &self.category)?;
        SharedError::require_non_empty("details", &self.details)?;
        Ok(())
    }
}
