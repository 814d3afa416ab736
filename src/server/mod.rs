//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`config`** - Environment configuration loading and validation
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading (fail-fast on secrets)
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: required variables validated up front;
//!    a missing `JWT_SECRET` or `DATABASE_URL` stops the process
//! 2. **State Creation**: lazy pool, session codec, cookie policy,
//!    refresh channel
//! 3. **Migrations**: run tolerantly; a down database defers, not fails
//! 4. **Router Creation**: routes, static files, and middleware layers

/// Environment configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
