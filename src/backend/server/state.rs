/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum sub-state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup from an [`AppConfig`] and an open
 * pool. It holds:
 * - The SQLite connection pool (users and feedback)
 * - The token service carrying the signing secret
 * - The credential hasher
 *
 * Nothing here is global; every handler receives what it needs through
 * `State`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::{BcryptHasher, CredentialHasher};
use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::{AppConfig, ConfigError};

/// Shared state for all request handlers
///
/// # Usage
///
/// ```rust,ignore
/// use axum::extract::State;
/// use feedback_board::backend::server::state::AppState;
///
/// async fn handler(State(app_state): State<AppState>) {
///     let user = get_user_by_email(&app_state.db_pool, "alice@example.com").await;
///     // ...
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Issues and verifies session tokens
    pub tokens: Arc<TokenService>,

    /// Hashes passwords at signup and checks them at login
    pub hasher: Arc<dyn CredentialHasher>,
}

impl AppState {
    /// Assemble the state from validated configuration and an open pool
    ///
    /// # Errors
    /// `ConfigError` if the token service rejects the configured secret.
    pub fn new(config: &AppConfig, db_pool: SqlitePool) -> Result<Self, ConfigError> {
        let tokens = TokenService::new(&config.secret_key)?;
        let hasher = BcryptHasher::new(config.bcrypt_cost);

        Ok(Self {
            db_pool,
            tokens: Arc::new(tokens),
            hasher: Arc::new(hasher),
        })
    }
}

/// Lets feedback handlers take `State<SqlitePool>` directly
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Lets the authentication middleware take `State<Arc<TokenService>>`
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
