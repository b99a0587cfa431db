/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` (token service, hasher)
 * 3. Create and configure the router
 *
 * Every step is required. A missing secret or an unreachable database
 * stops startup with an `InitError`.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, AppConfig, ConfigError};
use crate::backend::server::state::AppState;

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing feedback board backend");

    let db_pool = connect_database(config).await?;
    let app_state = AppState::new(config, db_pool)?;

    let app = create_router(app_state, config);
    tracing::info!("Router configured");

    Ok(app)
}
