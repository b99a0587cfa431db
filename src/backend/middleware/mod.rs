//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token gate for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use feedback_board::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/dashboard", get(dashboard))
//!     .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authorize, extract_bearer_token, AuthUser};
