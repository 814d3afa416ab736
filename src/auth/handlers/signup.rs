/**
 * Signup Handler
 *
 * This module implements the account registration handler for
 * POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Check whether the email is already registered
 * 3. Hash the password with bcrypt
 * 4. Create the user row
 * 5. Issue a session token and set the session cookie
 * 6. Return the signed-in user
 *
 * # Validation
 *
 * - Name must not be blank
 * - Email must contain '@' (basic shape check; the mailbox proves itself
 *   by receiving mail, not by passing a regex)
 * - Password must be at least 8 characters long
 * - Email must be unique
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and never logged
 * - The session cookie is HTTP-only; the token is not in the body
 * - The duplicate-email check runs again inside the database as a
 *   unique constraint, so two racing signups cannot both win
 */

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::auth::handlers::types::SignupRequest;
use crate::auth::password::hash_password;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::middleware::auth::SessionUser;
use crate::server::state::AppState;

/// Validate a signup request, returning the first problem found.
fn validate_signup(request: &SignupRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name must not be blank"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("Invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

/// Sign up handler
///
/// Registers a new account and signs it in immediately: the response
/// carries both the user and the session cookie, so no follow-up login
/// is needed.
///
/// # Arguments
///
/// * `State(state)` - Application state (pool, session codec, cookie policy)
/// * `Json(request)` - Signup request containing name, email, and password
///
/// # Returns
///
/// `200 OK` with the `SessionUser` body and a `Set-Cookie` header
/// installing the session
///
/// # Errors
///
/// * `422 Unprocessable Entity` - Blank name, malformed email, or short password
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Store, hashing, or token issuance failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    if let Err(e) = validate_signup(&request) {
        tracing::warn!("Signup rejected: {}", e);
        return Err(e);
    }

    // Friendly-path duplicate check; the unique constraint on
    // users.email settles any race this misses.
    if get_user_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Signup with already-registered email: {}", request.email);
        return Err(ApiError::EmailInUse);
    }

    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        &state.db_pool,
        request.name.trim().to_string(),
        request.email.clone(),
        password_hash,
    )
    .await?;

    let issued = state.sessions.issue(user.id, &user.name, &user.email)?;
    let cookie = state.cookies.session_cookie(&issued.token, issued.expires_at);

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}
