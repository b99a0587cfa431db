//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and building authorization headers.

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue};
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use feedback_board::backend::auth::users::create_user;
use feedback_board::backend::auth::{BcryptHasher, CredentialHasher, Identity, TokenService};

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Create a test user directly in the credential store
pub async fn create_test_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = BcryptHasher::new(4).hash(password)?;
    let id = create_user(pool, name, email, &password_hash).await?;

    Ok(TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Generate a token as if it had been issued at `issued_at`
pub fn generate_test_token_at(
    tokens: &TokenService,
    email: &str,
    name: &str,
    issued_at: DateTime<Utc>,
) -> String {
    tokens
        .issue_at(&Identity::new(email, name), issued_at)
        .expect("Failed to generate test token")
}

/// Create authorization header
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("Invalid header value"),
    )
}
