//! Authentication Module
//!
//! This module handles accounts, credentials, and sessions. It provides
//! the HTTP handlers for the authentication endpoints plus the building
//! blocks they stand on: password hashing, session token issuance and
//! verification, and the session cookie contract.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User model and database operations
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - Session token issuance and verification
//! - **`cookie`** - Session cookie building and parsing
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Session token codec
//! ├── cookie.rs       - Session cookie contract
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request types
//!     ├── signup.rs   - Account registration handler
//!     ├── login.rs    - Credential verification handler
//!     ├── logout.rs   - Session-ending handler
//!     └── me.rs       - Current user handler
//! ```
//!
//! # Session Model
//!
//! A session is a signed token in an HTTP-only cookie, valid for seven
//! days from issuance. The token carries the user's id, name, and email;
//! nothing is stored server-side, so verification is a pure CPU check
//! and logout is nothing more than clearing the cookie.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - The signing key comes from configuration; startup fails without it
//! - Invalid credentials return the same 401 for unknown email and
//!   wrong password
//! - The token never appears in a response body, only in the cookie

/// User model and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// Session token issuance and verification
pub mod sessions;

/// Session cookie building and parsing
pub mod cookie;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, SignupRequest};
pub use handlers::{get_me, login, logout, signup};
pub use sessions::SessionCodec;
