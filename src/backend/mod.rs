//! Backend Module
//!
//! This module contains all server-side code for the feedback board.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential store, password hashing, session tokens, handlers
//! - **`feedback`** - Feedback store and handlers
//! - **`middleware`** - Bearer-token gate
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs        - Module exports and documentation
//! ├── server/       - Server initialization and state
//! ├── routes/       - Route configuration
//! ├── auth/         - Authentication
//! ├── feedback/     - Feedback board
//! ├── middleware/   - Request middleware
//! └── error/        - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the token service and the credential
//! hasher. Handlers take only the part they need through `FromRef`.
//! Uniqueness and ordering are left to the database, so there are no
//! in-process locks.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Feedback board storage and handlers
pub mod feedback;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppConfig, AppState};
