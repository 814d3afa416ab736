/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * page routes, API routes, static file serving, and middleware into a
 * single Axum router.
 *
 * # Layering
 *
 * The route gate is applied as the outermost layer, so it sees every
 * request first: page navigations get steered by session state before
 * any handler or fallback runs, while `/api`, `/static`, and the
 * favicon pass through it untouched. Session verification for the API
 * lives further in, as a route layer on the protected group.
 *
 * An unknown path is a protected path as far as the gate is concerned:
 * anonymous visitors are sent to `/`, signed-in ones fall through to
 * the 404 fallback.
 */

use axum::{middleware, routing, Router};
use tower_http::services::ServeDir;

use crate::middleware::gate::route_gate;
use crate::routes::api_routes::configure_api_routes;
use crate::routes::pages::{dashboard_page, landing_page, signup_page};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared by handlers and middleware
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Pages
///
/// - `GET /` - Landing / login (public)
/// - `GET /signup` - Account creation (public)
/// - `GET /dashboard` - Task dashboard (protected)
///
/// ## API
///
/// See `configure_api_routes` for the full endpoint list.
///
/// ## Static Files
///
/// `/static/*` serves files from the `public` directory.
///
/// ## Fallback
///
/// Unmatched paths return a plain 404 (after passing the gate).
pub fn create_router(app_state: AppState) -> Router<()> {
    // Page routes
    let router = Router::new()
        .route("/", routing::get(landing_page))
        .route("/signup", routing::get(signup_page))
        .route("/dashboard", routing::get(dashboard_page));

    // API routes (public + session-protected groups)
    let router = configure_api_routes(router, &app_state);

    // Static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Route gate over everything, fallback included
    let router = router.layer(middleware::from_fn(route_gate));

    // Use AppState as router state
    router.with_state(app_state)
}
