/**
 * Server Initialization
 *
 * This module assembles the running application: state construction,
 * database migrations, and router creation.
 *
 * # Initialization Process
 *
 * 1. Build `AppState` from validated configuration (lazy pool, session
 *    codec, cookie policy, refresh channel)
 * 2. Run database migrations
 * 3. Create and configure the router
 *
 * # Migrations
 *
 * Migration failure is logged but does not abort startup: the pool is
 * lazy, so a database that is down right now may be up by the first
 * request, and a schema that is already current fails nothing. A truly
 * broken schema surfaces as store errors on use, with the migration
 * warning in the log to explain them.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated process configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. The only hard
/// failure is an unparseable database URL; an unreachable database
/// still yields a working app whose store calls error until it comes
/// back.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing taskdeck server");

    // Step 1: Assemble application state. No network traffic happens
    // here; the pool connects on first use.
    let app_state = AppState::from_config(config)?;

    // Step 2: Run migrations
    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&app_state.db_pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::warn!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing startup; store operations will fail until the database is reachable and migrated");
        }
    }

    // Step 3: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
