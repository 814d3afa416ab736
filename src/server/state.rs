/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - The PostgreSQL connection pool
 * - The session codec (token signing and verification keys)
 * - The cookie policy (environment-dependent cookie attributes)
 * - The task refresh broadcast channel
 *
 * # Connection Lifecycle
 *
 * The pool is created lazily: building the state never touches the
 * network. Connections are established on first use, broken ones are
 * discarded and re-established on the next acquire, and every acquire
 * is bounded by a timeout so a dead database turns into a prompt
 * `Internal` error instead of a hung request. Each connection also
 * carries a server-side `statement_timeout`, so a statement that stalls
 * after acquisition is cut short too.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need (`State<PgPool>`, `State<SessionCodec>`, ...)
 * without taking the whole `AppState`. This follows Axum's recommended
 * pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::time::Duration;

use crate::auth::cookie::CookiePolicy;
use crate::auth::sessions::SessionCodec;
use crate::server::config::AppConfig;
use crate::tasks::refresh::{refresh_channel, TaskRefreshBroadcast};

/// Upper bound on waiting for a pool connection. Keeps a saturated or
/// unreachable database from parking requests indefinitely.
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Server-side cap on a single statement, set as a session parameter on
/// every connection the pool opens. Bounds execution the way the
/// acquire timeout bounds checkout.
const STATEMENT_TIMEOUT: &str = "5s";

/// Application state shared across all handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL connection pool (lazy; see module docs)
/// * `sessions` - Session token codec, keyed once from configuration
/// * `cookies` - Cookie policy derived from the deployment environment
/// * `refresh` - Broadcast channel announcing task-list changes
///
/// # Thread Safety
///
/// Every field is cheaply cloneable and safe to share: the pool and the
/// broadcast sender are handles to shared internals, and the codec and
/// policy are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,

    /// Session token codec
    pub sessions: SessionCodec,

    /// Cookie attribute policy
    pub cookies: CookiePolicy,

    /// Task refresh broadcast channel
    pub refresh: TaskRefreshBroadcast,
}

impl AppState {
    /// Build the application state from validated configuration
    ///
    /// # Arguments
    /// * `config` - Validated process configuration
    ///
    /// # Returns
    /// The assembled state. The only failure mode is an unparseable
    /// database URL; an unreachable database is not an error here, the
    /// lazy pool surfaces that on first use.
    pub fn from_config(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let connect_options = config
            .database_url
            .parse::<PgConnectOptions>()?
            .options([("statement_timeout", STATEMENT_TIMEOUT)]);

        let db_pool = PgPoolOptions::new()
            .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
            .connect_lazy_with(connect_options);

        Ok(Self {
            db_pool,
            sessions: SessionCodec::new(&config.jwt_secret),
            cookies: CookiePolicy::new(config.production),
            refresh: refresh_channel(),
        })
    }
}

/// Implement FromRef for PgPool
///
/// This allows Axum handlers to extract the database pool directly
/// from `AppState` using `State(pool): State<PgPool>`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for SessionCodec
///
/// This allows Axum handlers to extract the session codec directly
/// from `AppState`.
impl FromRef<AppState> for SessionCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

/// Implement FromRef for CookiePolicy
///
/// This allows Axum handlers to extract the cookie policy directly
/// from `AppState`.
impl FromRef<AppState> for CookiePolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookies
    }
}

/// Implement FromRef for TaskRefreshBroadcast
///
/// This allows Axum handlers to extract the refresh broadcast sender
/// directly from `AppState`.
impl FromRef<AppState> for TaskRefreshBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.refresh.clone()
    }
}
