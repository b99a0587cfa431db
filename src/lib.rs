//! Feedback Board - Main Library
//!
//! A small HTTP backend for a product feedback board. Users sign up and log
//! in to obtain a one-hour session token; the board itself accepts, lists
//! and deletes feedback items.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that cross the HTTP boundary
//!   - Feedback item and submission payload
//!   - Validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware and handlers
//!   - Credential store, token service and feedback store (SQLite via sqlx)
//!   - Configuration and startup
//!
//! # Usage
//!
//! ```rust,no_run
//! use feedback_board::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Module-level error enums built with `thiserror`
//! - `backend::error::BackendError` maps every failure onto a status code
//!   and a `{"message": "..."}` body

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
