//! API Error Module
//!
//! This module defines the error taxonomy shared by every handler and
//! its conversions to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! All handlers return `Result<_, ApiError>`; the `IntoResponse`
//! implementation turns errors into JSON responses so failures can be
//! propagated with `?` all the way out of a handler.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
