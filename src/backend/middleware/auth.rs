/**
 * Authentication Middleware
 *
 * This module protects routes that require a session token. It reads the
 * bearer token from the Authorization header, verifies it and attaches the
 * decoded claims to the request for handlers to extract.
 *
 * - No bearer token: 401 `{"message": "Unauthorized"}`
 * - Token fails verification or has expired: 403
 *   `{"message": "Invalid or expired token"}`
 *
 * The gate only reads; it never touches the stores.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::BackendError;

/// Pull the token out of `Authorization: Bearer <token>`
///
/// A missing header, a non-UTF-8 value, another scheme or an empty token
/// all count as "no bearer token".
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BackendError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::MissingToken
        })?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Authorization header carries no bearer token");
            BackendError::MissingToken
        })
}

/// Decide whether a request may proceed, returning its claims if so
pub fn authorize(tokens: &TokenService, headers: &HeaderMap) -> Result<Claims, BackendError> {
    let token = extract_bearer_token(headers)?;

    tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::InvalidToken
    })
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it with the token service
/// 3. Attaches the claims to request extensions for use in handlers
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let claims = authorize(&tokens, request.headers())?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only usable on routes wrapped by [`auth_middleware`]; elsewhere it
/// rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Claims not found in request extensions");
                BackendError::MissingToken
            })?;

        Ok(AuthUser(claims))
    }
}
