/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors,
 * allowing them to be returned straight from Axum handlers and to be
 * produced from lower-level failures with `?`.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Email already in use",
 *   "status": 409
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The response is a JSON object with:
    /// - `error`: The error message
    /// - `status`: The HTTP status code
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"error":"{}","status":{}}}"#, message, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}

impl From<sqlx::Error> for ApiError {
    /// Map store failures into the API taxonomy.
    ///
    /// The only unique constraint in the schema is `users.email`, so a
    /// unique violation always means a signup conflict. Everything else
    /// is logged here, at the single choke point, and surfaces as the
    /// generic `Internal` variant.
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return ApiError::EmailInUse;
            }
        }
        tracing::error!("Store operation failed: {:?}", err);
        ApiError::Internal
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    /// Hashing failures are operational faults (cost misconfiguration,
    /// RNG trouble), never a statement about the credentials themselves.
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing failed: {:?}", err);
        ApiError::Internal
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    /// Only token *encoding* errors take this path. Verification never
    /// surfaces a `jsonwebtoken` error; it reports invalid tokens as
    /// `None` and the callers map that to `Unauthorized` themselves.
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("Session token encoding failed: {:?}", err);
        ApiError::Internal
    }
}
