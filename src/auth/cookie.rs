/**
 * Session Cookie Contract
 *
 * The session token travels in exactly one place: an HTTP-only cookie
 * named `session`. This module owns both directions of that contract,
 * building `Set-Cookie` values for login/signup/logout and pulling the
 * token back out of the `Cookie` request header.
 *
 * # Attributes
 *
 * - `HttpOnly` always; page scripts never see the token
 * - `Path=/` so the cookie rides along on every route
 * - `SameSite=Lax` to keep cross-site POSTs from carrying the session
 * - `Secure` only when the process runs in production, so local HTTP
 *   development keeps working
 * - `Expires` mirrors the token expiration, so cookie and token die at
 *   the same instant
 */

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};

/// Name of the cookie that carries the session token.
pub const SESSION_COOKIE: &str = "session";

/// RFC 7231 `IMF-fixdate`, the format HTTP wants in `Expires`.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Environment-dependent cookie settings, fixed at startup.
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Build the `Set-Cookie` value that installs a session.
    pub fn session_cookie(&self, token: &str, expires_at: DateTime<Utc>) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Expires={}; HttpOnly; SameSite=Lax",
            SESSION_COOKIE,
            token,
            expires_at.format(HTTP_DATE)
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Build the `Set-Cookie` value that removes a session.
    ///
    /// An empty value plus an epoch expiry tells every browser to drop
    /// the cookie immediately; `Max-Age=0` covers clients that prefer it.
    pub fn clearing_cookie(&self) -> String {
        let mut cookie = format!(
            "{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; HttpOnly; SameSite=Lax",
            SESSION_COOKIE
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Extract the session token from the request's `Cookie` header(s).
///
/// Follows the `name=value; name=value` pair syntax, tolerating the
/// usual whitespace slop. An empty value counts as no session at all,
/// which is exactly the state a just-cleared cookie leaves behind.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

/// Whether the request carries a (non-empty) session cookie.
///
/// Presence only. The route gate keys off this without verifying the
/// token; the API layer does its own full verification.
pub fn has_session(headers: &HeaderMap) -> bool {
    session_token(headers).is_some()
}
