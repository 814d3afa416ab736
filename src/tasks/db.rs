/**
 * Task Database Operations
 *
 * This module contains the owner-scoped queries behind the task
 * endpoints.
 *
 * # Ownership
 *
 * Every statement that touches an existing row filters on
 * `id = $n AND user_id = $m` in the statement itself. There is no
 * fetch-then-check step: scoping and mutation are one atomic statement,
 * so a task belonging to someone else and a task that does not exist
 * are indistinguishable at this layer. Both come back as `None` (or
 * `false` for deletes) and the handlers map that to a single combined
 * not-found/unauthorized error.
 */

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::tasks::types::Task;

/// List a user's tasks, newest first
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner_id` - Owning user's ID
///
/// # Returns
/// All of the user's tasks ordered by creation time descending
pub async fn list_tasks(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Task>, sqlx::Error> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"
        SELECT id, user_id, title, description, category, completed, created_at, updated_at
        FROM tasks
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

/// Create a task for a user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner_id` - Owning user's ID (from the verified session, never the payload)
/// * `title` - Task title (validated non-blank by the caller)
/// * `description` - Optional description
/// * `category` - Category label (caller applies the default)
///
/// # Returns
/// The created task
pub async fn create_task(
    pool: &PgPool,
    owner_id: Uuid,
    title: String,
    description: Option<String>,
    category: String,
) -> Result<Task, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let task = sqlx::query_as::<_, Task>(
        r#"
        INSERT INTO tasks (id, user_id, title, description, category, completed, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7)
        RETURNING id, user_id, title, description, category, completed, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(&title)
    .bind(&description)
    .bind(&category)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Replace a task's editable fields
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner_id` - Owning user's ID
/// * `task_id` - Task to update
/// * `title` - New title
/// * `description` - New description
/// * `category` - New category
/// * `completed` - New completion flag
///
/// # Returns
/// The updated task, or `None` when no row matched the (id, owner) pair
pub async fn update_task(
    pool: &PgPool,
    owner_id: Uuid,
    task_id: Uuid,
    title: String,
    description: Option<String>,
    category: String,
    completed: bool,
) -> Result<Option<Task>, sqlx::Error> {
    let now = Utc::now();

    let task = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET title = $1, description = $2, category = $3, completed = $4, updated_at = $5
        WHERE id = $6 AND user_id = $7
        RETURNING id, user_id, title, description, category, completed, created_at, updated_at
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(&category)
    .bind(completed)
    .bind(now)
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// Flip a task's completion flag
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner_id` - Owning user's ID
/// * `task_id` - Task to update
/// * `completed` - New completion state
///
/// # Returns
/// The updated task, or `None` when no row matched the (id, owner) pair
pub async fn set_task_status(
    pool: &PgPool,
    owner_id: Uuid,
    task_id: Uuid,
    completed: bool,
) -> Result<Option<Task>, sqlx::Error> {
    let now = Utc::now();

    let task = sqlx::query_as::<_, Task>(
        r#"
        UPDATE tasks
        SET completed = $1, updated_at = $2
        WHERE id = $3 AND user_id = $4
        RETURNING id, user_id, title, description, category, completed, created_at, updated_at
        "#,
    )
    .bind(completed)
    .bind(now)
    .bind(task_id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(task)
}

/// Delete a task
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `owner_id` - Owning user's ID
/// * `task_id` - Task to delete
///
/// # Returns
/// `true` when a row was deleted, `false` when nothing matched (already
/// deleted, never existed, or owned by someone else)
pub async fn delete_task(
    pool: &PgPool,
    owner_id: Uuid,
    task_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(task_id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
