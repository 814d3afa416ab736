/**
 * Route Gate Middleware
 *
 * This middleware steers browser navigation by session state: visitors
 * holding a session cookie are moved off the public pages onto the
 * dashboard, and visitors without one are moved off protected pages
 * back to the landing page. API, static asset, and favicon requests
 * pass through untouched; those surfaces answer for themselves.
 *
 * # Presence, Not Validity
 *
 * The gate checks only that a session cookie exists. Signature and
 * expiry verification happen downstream in `middleware::auth` on every
 * API request that needs an identity. The split is deliberate: the gate
 * runs on every navigation including anonymous ones, so it stays a
 * header lookup, and a forged or expired cookie buys nothing but a
 * redirect to a dashboard whose data calls all come back 401.
 *
 * # Redirects
 *
 * Redirects are `307 Temporary Redirect`, which keeps method and body
 * intact and is never cached as permanent by browsers.
 */

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::cookie;

/// Pages reachable without a session: the landing page and signup.
const PUBLIC_PATHS: &[&str] = &["/", "/signup"];

/// Where a signed-in visitor lands when leaving a public page.
const SIGNED_IN_HOME: &str = "/dashboard";

/// Where a signed-out visitor lands when leaving a protected page.
const SIGNED_OUT_HOME: &str = "/";

/// Whether the gate ignores this path entirely.
fn is_exempt(path: &str) -> bool {
    path.starts_with("/api") || path.starts_with("/static") || path == "/favicon.ico"
}

/// Whether this path is reachable without a session.
fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Route gate middleware
///
/// Applied across the whole router, ahead of everything else:
/// - exempt path: pass through
/// - public path with a session cookie: `307` to `/dashboard`
/// - protected path without a session cookie: `307` to `/`
/// - otherwise: pass through
pub async fn route_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if is_exempt(path) {
        return next.run(request).await;
    }

    let signed_in = cookie::has_session(request.headers());

    if is_public(path) {
        if signed_in {
            return Redirect::temporary(SIGNED_IN_HOME).into_response();
        }
    } else if !signed_in {
        return Redirect::temporary(SIGNED_OUT_HOME).into_response();
    }

    next.run(request).await
}
