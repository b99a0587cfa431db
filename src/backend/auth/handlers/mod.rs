//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── signup.rs    - User registration handler
//! ├── login.rs     - User authentication handler
//! └── dashboard.rs - Protected dashboard handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - Credential check, returns a session token
//! - **`dashboard`** - GET /dashboard - Requires a bearer token

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Dashboard handler
pub mod dashboard;

// Re-export commonly used types
pub use types::{DashboardResponse, LoginRequest, LoginResponse, MessageResponse, SignupRequest};

// Re-export handlers
pub use dashboard::dashboard;
pub use login::login;
pub use signup::signup;
