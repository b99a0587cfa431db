//! Server Module
//!
//! This module contains the server-side setup: configuration, shared state
//! and application assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading and the database pool
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env`, failing without a secret
//! 2. **Database**: SQLite pool opened and migrated
//! 3. **State Creation**: token service and hasher built from the config
//! 4. **Router Creation**: routes, auth gate, CORS and tracing layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::{create_app, InitError};
pub use state::AppState;
