/**
 * Task Handlers
 *
 * This module implements the HTTP handlers for the task endpoints. All
 * of them sit behind `session_middleware`: a request without a valid
 * session is answered 401 before any of this code runs.
 *
 * # Ownership
 *
 * Handlers take the owner from the verified session (`CurrentUser`) and
 * pass it into owner-scoped queries. A task that does not exist and a
 * task owned by someone else produce the same 404; the API never
 * confirms that a foreign task ID is real.
 *
 * # Refresh Announcements
 *
 * Every successful mutation announces the owner on the task refresh
 * channel. The announcement happens after the store commit and its
 * delivery is best-effort; the response does not depend on it.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;
use crate::tasks::db;
use crate::tasks::refresh::notify_tasks_changed;
use crate::tasks::types::{
    CreateTaskRequest, Task, UpdateStatusRequest, UpdateTaskRequest, DEFAULT_CATEGORY,
};

/// Validate a task title, returning the first problem found.
fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::validation("Title must not be blank"));
    }
    Ok(())
}

/// Parse a path segment as a task ID. A segment that is not a UUID can
/// name no task, so it collapses into the same merged 404 as an unknown
/// or foreign ID instead of escaping the JSON error shape.
fn parse_task_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFoundOrUnauthorized)
}

/// List tasks handler
///
/// GET /api/tasks
///
/// # Returns
///
/// `200 OK` with the signed-in user's tasks, newest first
pub async fn list_tasks(
    State(pool): State<PgPool>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = db::list_tasks(&pool, user.id).await?;
    Ok(Json(tasks))
}

/// Create task handler
///
/// POST /api/tasks
///
/// The payload has no owner field; the task belongs to the signed-in
/// user unconditionally. A missing category defaults to `"personal"`.
///
/// # Returns
///
/// `200 OK` with the created task
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Blank title
pub async fn create_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    if let Err(e) = validate_title(&request.title) {
        tracing::warn!("Task creation rejected: {}", e);
        return Err(e);
    }

    let category = request
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    let task = db::create_task(
        &state.db_pool,
        user.id,
        request.title,
        request.description,
        category,
    )
    .await?;

    tracing::info!("Task {} created for user {}", task.id, user.id);
    notify_tasks_changed(&state.refresh, user.id);

    Ok(Json(task))
}

/// Update task handler
///
/// PUT /api/tasks/{id}
///
/// Replaces the task's editable fields in one owner-scoped statement.
///
/// # Returns
///
/// `200 OK` with the updated task
///
/// # Errors
///
/// * `404 Not Found` - No task with this ID belongs to the caller
/// * `422 Unprocessable Entity` - Blank title
pub async fn update_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&task_id)?;
    if let Err(e) = validate_title(&request.title) {
        tracing::warn!("Task update rejected: {}", e);
        return Err(e);
    }

    let task = db::update_task(
        &state.db_pool,
        user.id,
        task_id,
        request.title,
        request.description,
        request.category,
        request.completed,
    )
    .await?
    .ok_or(ApiError::NotFoundOrUnauthorized)?;

    tracing::info!("Task {} updated by user {}", task.id, user.id);
    notify_tasks_changed(&state.refresh, user.id);

    Ok(Json(task))
}

/// Set completion handler
///
/// PATCH /api/tasks/{id}/status
///
/// # Returns
///
/// `200 OK` with the updated task
///
/// # Errors
///
/// * `404 Not Found` - No task with this ID belongs to the caller
pub async fn update_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Task>, ApiError> {
    let task_id = parse_task_id(&task_id)?;
    let task = db::set_task_status(&state.db_pool, user.id, task_id, request.completed)
        .await?
        .ok_or(ApiError::NotFoundOrUnauthorized)?;

    tracing::info!(
        "Task {} marked {} by user {}",
        task.id,
        if task.completed { "complete" } else { "incomplete" },
        user.id
    );
    notify_tasks_changed(&state.refresh, user.id);

    Ok(Json(task))
}

/// Delete task handler
///
/// DELETE /api/tasks/{id}
///
/// Hard delete. Repeating the request yields the same 404 as a task
/// that never existed.
///
/// # Returns
///
/// `204 No Content`
///
/// # Errors
///
/// * `404 Not Found` - No task with this ID belongs to the caller
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let task_id = parse_task_id(&task_id)?;
    let deleted = db::delete_task(&state.db_pool, user.id, task_id).await?;
    if !deleted {
        return Err(ApiError::NotFoundOrUnauthorized);
    }

    tracing::info!("Task {} deleted by user {}", task_id, user.id);
    notify_tasks_changed(&state.refresh, user.id);

    Ok(StatusCode::NO_CONTENT)
}
