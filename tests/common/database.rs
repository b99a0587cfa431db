//! Database test fixtures and utilities
//!
//! In-memory databases live as long as their single pooled connection, so
//! tests that need several connections use a file in a temporary directory.

use sqlx::SqlitePool;
use tempfile::TempDir;

use feedback_board::backend::server::config::connect_database;

use super::test_config;

/// Migrated in-memory pool with a single connection
pub async fn create_test_pool() -> SqlitePool {
    connect_database(&test_config("sqlite::memory:", 1))
        .await
        .expect("Failed to create test database pool")
}

/// Test database fixture backed by a file
///
/// The directory, and the database in it, is removed on drop.
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: TempDir,
}

impl TestDatabase {
    /// Create a migrated file database allowing `max_connections`
    pub async fn new(max_connections: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("feedback.db").display());
        let pool = connect_database(&test_config(&url, max_connections))
            .await
            .expect("Failed to create file database");
        Self { pool, _dir: dir }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
