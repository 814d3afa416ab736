/**
 * API Error Types
 *
 * This module defines the error taxonomy for the task tracker API.
 * Every fallible handler returns `ApiError`, which carries enough to
 * produce an HTTP response without exposing internal detail.
 *
 * # Taxonomy
 *
 * - `Unauthorized` - no, invalid, or expired session
 * - `NotFoundOrUnauthorized` - record absent or owned by someone else;
 *   deliberately a single variant so responses never reveal whether a
 *   task id exists
 * - `InvalidCredentials` - login identity mismatch; the same variant is
 *   returned for an unknown email and for a wrong password
 * - `EmailInUse` - signup conflict on the unique email column
 * - `Validation` - malformed input that reached the service boundary
 * - `Internal` - store unreachable, codec failure, or any other fault
 *   the caller can do nothing about
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error type returned by all API handlers.
///
/// Validation and authorization failures are expected control flow and
/// travel as values; only the `Internal` variant represents a genuine
/// fault, and its cause is logged rather than serialized.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No session, or a session that failed verification.
    #[error("Unauthorized")]
    Unauthorized,

    /// The task does not exist, or it belongs to another user. Merged on
    /// purpose: a non-owner probing ids gets the same answer either way.
    #[error("Task not found or unauthorized")]
    NotFoundOrUnauthorized,

    /// Login failed. Never says which half of the credentials was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account.
    #[error("Email already in use")]
    EmailInUse,

    /// Input rejected at the service boundary (blank title, bad email
    /// format, short password).
    #[error("{0}")]
    Validation(String),

    /// Something on our side broke. The response body stays generic.
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a validation error from any message-like value.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for this error.
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized`, `InvalidCredentials` - 401
    /// - `NotFoundOrUnauthorized` - 404
    /// - `EmailInUse` - 409
    /// - `Validation` - 422
    /// - `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFoundOrUnauthorized => StatusCode::NOT_FOUND,
            Self::EmailInUse => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::NotFoundOrUnauthorized.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::EmailInUse.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::validation("Title must not be empty").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages_do_not_distinguish_absent_from_foreign() {
        // The merged variant has a single message regardless of cause.
        let message = ApiError::NotFoundOrUnauthorized.to_string();
        assert_eq!(message, "Task not found or unauthorized");
    }

    #[test]
    fn test_invalid_credentials_message_is_symmetric() {
        // One message for unknown email and wrong password alike.
        let message = ApiError::InvalidCredentials.to_string();
        assert!(!message.to_lowercase().contains("email not found"));
        assert!(!message.to_lowercase().contains("wrong password"));
        assert_eq!(message, "Invalid email or password");
    }

    #[test]
    fn test_validation_carries_message() {
        let error = ApiError::validation("Title must not be empty");
        assert_eq!(error.to_string(), "Title must not be empty");
    }

    #[test]
    fn test_internal_message_is_generic() {
        assert_eq!(ApiError::Internal.to_string(), "Internal server error");
    }
}
