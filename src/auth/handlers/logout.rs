/**
 * Logout Handler
 *
 * This module implements the session-ending handler for
 * POST /api/auth/logout.
 *
 * # Semantics
 *
 * Logout clears the session cookie and nothing else. Tokens are not
 * tracked server-side, so there is nothing to revoke: a token copied
 * out of the cookie before logout keeps verifying until its seven-day
 * expiry. What logout guarantees is that this browser stops sending it.
 *
 * The endpoint never fails observably. It does not require a session,
 * so a visitor holding an expired or garbled cookie can still clear it.
 */

use axum::{extract::State, http::header, http::StatusCode, response::IntoResponse};

use crate::auth::cookie::CookiePolicy;

/// Logout handler
///
/// # Arguments
///
/// * `State(cookies)` - Cookie attribute policy
///
/// # Returns
///
/// `204 No Content` with a `Set-Cookie` header that removes the session
/// cookie
pub async fn logout(State(cookies): State<CookiePolicy>) -> impl IntoResponse {
    tracing::debug!("Clearing session cookie");

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, cookies.clearing_cookie())],
    )
}
