//! Tasks Module
//!
//! This module implements the task list itself: the task model, the
//! owner-scoped database operations, the HTTP handlers, and the refresh
//! broadcast that announces mutations.
//!
//! # Module Structure
//!
//! ```text
//! tasks/
//! ├── mod.rs          - Module exports and documentation
//! ├── types.rs        - Task model and request payloads
//! ├── db.rs           - Owner-scoped database operations
//! ├── handlers.rs     - HTTP handlers for the task endpoints
//! └── refresh.rs      - Task refresh broadcasting
//! ```
//!
//! # Ownership Model
//!
//! Tasks are strictly per-user. The owner comes from the verified
//! session on every request, every query filters on it in the same
//! statement that reads or mutates, and the request payloads have no
//! owner field to tamper with. Wrong-owner access and missing rows are
//! deliberately indistinguishable in responses.

/// Task model and request payloads
pub mod types;

/// Owner-scoped database operations
pub mod db;

/// HTTP handlers for task endpoints
pub mod handlers;

/// Task refresh broadcasting
pub mod refresh;

// Re-export commonly used items
pub use refresh::{notify_tasks_changed, TaskRefreshBroadcast};
pub use types::Task;
