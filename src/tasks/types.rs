/**
 * Task Model and Request Payloads
 *
 * This module defines the task record as stored, plus the JSON payloads
 * the task endpoints accept. None of the request types carry an owner
 * field: ownership always comes from the verified session, so a client
 * cannot claim another user's ID by construction.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned when a task is created without one.
pub const DEFAULT_CATEGORY: &str = "personal";

/// Task struct representing a task in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (UUID)
    pub id: Uuid,
    /// Owning user's ID
    pub user_id: Uuid,
    /// Task title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Free-form category label
    pub category: String,
    /// Completion flag
    pub completed: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"personal"` when omitted
    pub category: Option<String>,
}

/// Payload for a full task update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub completed: bool,
}

/// Payload for flipping just the completion flag
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub completed: bool,
}
