//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints. Handlers are organized into focused submodules.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request types
//! ├── signup.rs   - Account registration handler
//! ├── login.rs    - Credential verification handler
//! ├── logout.rs   - Session-ending handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - Register and sign in
//! - **`login`** - POST /api/auth/login - Verify credentials and sign in
//! - **`logout`** - POST /api/auth/logout - Clear the session cookie
//! - **`get_me`** - GET /api/auth/me - Echo the signed-in identity
//!
//! # Session Flow
//!
//! 1. **Signup / Login**: credentials in → session cookie out; the body
//!    is the `SessionUser`, never the token
//! 2. **Me**: session cookie in → verified identity out
//! 3. **Logout**: clearing cookie out, unconditionally

/// Request types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
