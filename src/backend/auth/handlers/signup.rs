/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Require a non-empty email and password
 * 2. Hash the password with the configured `CredentialHasher` on the
 *    blocking pool; a password bcrypt would truncate is refused
 * 3. Insert the user; the store reports a duplicate email
 * 4. Answer 201 `{message}` (no token; the client logs in next)
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::auth::password::HashError;
use crate::backend::auth::users::{create_user, UserError};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::SharedError;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - A user with this email already exists
/// * `500 Internal Server Error` - Unreadable body, missing email/password,
///   overlong password, hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Alice", "email": "alice@example.com", "password": "hunter22" }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload?;
    tracing::info!("Signup request for email: {}", request.email);

    SharedError::require_non_empty("email", &request.email)?;
    SharedError::require_non_empty("password", &request.password)?;

    let hasher = state.hasher.clone();
    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {:?}", e);
            BackendError::internal("Error during signup")
        })?
        .map_err(|e| match e {
            HashError::TooLong => {
                tracing::warn!("Password too long for: {}", request.email);
                BackendError::from(SharedError::validation("password", "is too long"))
            }
            HashError::Bcrypt(e) => {
                tracing::error!("Failed to hash password: {:?}", e);
                BackendError::internal("Error during signup")
            }
        })?;

    let user_id = create_user(&state.db_pool, &request.name, &request.email, &password_hash)
        .await
        .map_err(|e| match e {
            UserError::DuplicateEmail(email) => {
                tracing::warn!("Email already exists: {}", email);
                BackendError::DuplicateEmail
            }
            UserError::Database(e) => {
                tracing::error!("Failed to create user: {:?}", e);
                BackendError::internal("Error during signup")
            }
        })?;

    tracing::info!("User created successfully: {} ({})", user_id, request.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Signup successful")),
    ))
}
