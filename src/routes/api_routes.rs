/**
 * API Route Configuration
 *
 * This module wires the JSON API endpoints into the router, split into
 * a public group and a session-protected group.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/signup` - Register and sign in (public)
 * - `POST /api/auth/login` - Verify credentials and sign in (public)
 * - `POST /api/auth/logout` - Clear the session cookie (public)
 * - `GET /api/auth/me` - Current user (requires session)
 *
 * ## Tasks (all require a session)
 * - `GET /api/tasks` - List the caller's tasks
 * - `POST /api/tasks` - Create a task
 * - `PUT /api/tasks/{id}` - Update a task
 * - `PATCH /api/tasks/{id}/status` - Set completion
 * - `DELETE /api/tasks/{id}` - Delete a task
 *
 * # Authentication
 *
 * The protected group carries `session_middleware` as a route layer, so
 * session verification runs once, ahead of every protected handler, and
 * a missing or bad session is a 401 before any handler code. Logout is
 * deliberately public: clearing a cookie must work even when the token
 * inside it has already expired.
 */

use axum::{middleware, routing, Router};

use crate::auth::{get_me, login, logout, signup};
use crate::middleware::auth::session_middleware;
use crate::server::state::AppState;
use crate::tasks::handlers::{create_task, delete_task, list_tasks, update_status, update_task};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed to arm the session middleware
///
/// # Returns
///
/// Router with all API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", routing::get(get_me))
        .route(
            "/api/tasks",
            routing::get(list_tasks).post(create_task),
        )
        .route(
            "/api/tasks/{id}",
            routing::put(update_task).delete(delete_task),
        )
        .route(
            "/api/tasks/{id}/status",
            routing::patch(update_status),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ));

    router
        .route("/api/auth/signup", routing::post(signup))
        .route("/api/auth/login", routing::post(login))
        .route("/api/auth/logout", routing::post(logout))
        .merge(protected)
}
