/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which
 * returns the identity of the currently signed-in user.
 *
 * # Identity Source
 *
 * The route sits behind `session_middleware`, which has already
 * verified the session token, so the handler only echoes the claims.
 * There is no store round-trip: the verified token is the session, and
 * it already carries the id, name, and email this response needs.
 */

use axum::response::Json;

use crate::middleware::auth::{CurrentUser, SessionUser};

/// Get current user handler
///
/// # Arguments
///
/// * `CurrentUser(user)` - Identity attached by the session middleware
///
/// # Returns
///
/// `200 OK` with the `SessionUser` body. A missing or invalid session
/// never reaches this handler; the middleware answers 401 first.
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<SessionUser> {
    Json(user)
}
