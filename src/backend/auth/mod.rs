//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs       - Module exports and documentation
//! ├── users.rs     - User model and database operations
//! ├── password.rs  - Credential hashing
//! ├── sessions.rs  - Session token issuing and verification
//! └── handlers/    - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email and password → password hashed → user stored
//! 2. **Login**: email and password → hash verified → session token returned
//! 3. **Dashboard**: bearer token → verified by the middleware → claims returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs signed with the configured secret
//! - Tokens expire one hour after issue
//! - Unknown email and wrong password both return 401

/// User data model and database operations
pub mod users;

/// Credential hashing
pub mod password;

/// Session token issuing and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{dashboard, login, signup};
pub use password::{BcryptHasher, CredentialHasher};
pub use sessions::{Claims, Identity, TokenError, TokenService};
