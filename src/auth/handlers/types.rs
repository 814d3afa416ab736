/**
 * Authentication Handler Types
 *
 * This module defines the request types used by the authentication
 * handlers.
 *
 * Successful signup, login, and `me` responses all share one body: the
 * `SessionUser` from `middleware::auth`. The session token itself never
 * appears in a response body; it travels only in the HTTP-only cookie.
 */

use serde::{Deserialize, Serialize};

/// Sign up request
///
/// Contains the name, email and password for account registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's display name
    pub name: String,
    /// User's email address (unique account key)
    pub email: String,
    /// User's password (hashed before storage, never logged)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}
