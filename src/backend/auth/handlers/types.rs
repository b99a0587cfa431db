/**
 * Authentication Handler Types
 *
 * This module defines the request and response bodies used by the signup,
 * login and dashboard handlers.
 *
 * Request fields default to empty strings when absent so that a missing
 * field ends up as a validation or credential failure instead of a JSON
 * decoding rejection.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::Claims;

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// User's email address
    #[serde(default)]
    pub email: String,
    /// User's password (will be hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    /// Checked against the stored hash, never stored
    #[serde(default)]
    pub password: String,
}

/// Plain `{message}` body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying the session token (1-hour expiration)
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Dashboard response echoing the decoded token claims
#[derive(Serialize, Deserialize, Debug)]
pub struct DashboardResponse {
    pub message: String,
    pub user: Claims,
}
