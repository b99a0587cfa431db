/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password against the stored hash (on the blocking pool)
 * 3. Issue a session token with claims `{email, name}`, valid for 1 hour
 *
 * An unknown email and a wrong password produce the same 401 response.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::Identity;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - User is not found or password is incorrect
/// * `500 Internal Server Error` - Unreadable body, or the database query,
///   hash check or token signing failed
///
/// # Example Response
///
/// ```json
/// { "message": "Login successful", "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::internal("Error during login")
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            BackendError::InvalidCredentials
        })?;

    let hasher = state.hasher.clone();
    let password = request.password.clone();
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {:?}", e);
            BackendError::internal("Error during login")
        })?
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal("Error during login")
        })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(&Identity::new(user.email.clone(), user.name.clone()))?;

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
