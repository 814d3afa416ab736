/**
 * Login Handler
 *
 * This module implements the authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token and set the session cookie
 * 4. Return the signed-in user
 *
 * # Security Notes
 *
 * - An unknown email and a wrong password produce byte-identical
 *   responses and identical log lines, so the endpoint cannot be used
 *   to probe which addresses have accounts
 * - Password comparison happens inside bcrypt
 * - Passwords are never logged or echoed
 */

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::auth::handlers::types::LoginRequest;
use crate::auth::password::verify_password;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::middleware::auth::SessionUser;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies credentials and installs a fresh seven-day session.
///
/// # Arguments
///
/// * `State(state)` - Application state (pool, session codec, cookie policy)
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// `200 OK` with the `SessionUser` body and a `Set-Cookie` header
/// installing the session
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown email or wrong password (indistinguishable)
/// * `500 Internal Server Error` - Store or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Login failed for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let issued = state.sessions.issue(user.id, &user.name, &user.email)?;
    let cookie = state.cookies.session_cookie(&issued.token, issued.expires_at);

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}
