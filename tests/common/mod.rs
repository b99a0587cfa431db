//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Authentication test helpers
//! - Custom assertion macros
//! - A `TestApp` wrapping the full router in an `axum_test::TestServer`

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

use std::sync::Arc;

use axum_test::TestServer;
use sqlx::SqlitePool;

use feedback_board::backend::auth::TokenService;
use feedback_board::backend::routes::create_router;
use feedback_board::backend::server::{AppConfig, AppState};

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;

pub const TEST_SECRET: &str = "integration-test-secret";

/// The whole application over an in-memory database
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config("sqlite::memory:", 1);
        let pool = feedback_board::backend::server::config::connect_database(&config)
            .await
            .expect("Failed to open test database");
        let state = AppState::new(&config, pool.clone()).expect("Failed to build app state");
        let server = TestServer::new(create_router(state.clone(), &config))
            .expect("Failed to start test server");

        Self {
            server,
            pool,
            state,
        }
    }

    /// Token service the server verifies against
    pub fn tokens(&self) -> Arc<TokenService> {
        self.state.tokens.clone()
    }
}

/// Configuration with a fixed secret and the cheapest bcrypt cost
pub fn test_config(database_url: &str, max_connections: u32) -> AppConfig {
    AppConfig::builder()
        .secret_key(TEST_SECRET)
        .database_url(database_url)
        .bcrypt_cost(4)
        .max_connections(max_connections)
        .build()
        .expect("Invalid test configuration")
}
