//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation and layers
//! └── api_routes.rs - Route tables per area
//! ```
//!
//! # Route Types
//!
//! | Method | Path                   | Auth         |
//! |--------|------------------------|--------------|
//! | POST   | `/signup`              | none         |
//! | POST   | `/login`               | none         |
//! | POST   | `/api/feedbacks`       | none         |
//! | GET    | `/api/feedbacks`       | none         |
//! | DELETE | `/api/feedbacks/{id}`  | none         |
//! | GET    | `/dashboard`           | bearer token |

/// Main router creation
pub mod router;

/// API route tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
