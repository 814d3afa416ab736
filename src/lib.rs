//! Taskdeck - Main Library
//!
//! Taskdeck is a per-user task tracker served over HTTP: accounts with
//! bcrypt-hashed passwords, signed seven-day sessions carried in an
//! HTTP-only cookie, navigation steered by session state, and a task
//! CRUD API strictly scoped to the signed-in owner.
//!
//! # Module Structure
//!
//! The library is organized into focused top-level modules:
//!
//! - **`auth`** - Accounts, password hashing, session tokens, the
//!   session cookie contract, and the authentication endpoints
//! - **`tasks`** - Task model, owner-scoped store operations, task
//!   endpoints, and the refresh broadcast
//! - **`middleware`** - The route gate (navigation steering) and the
//!   session verification layer for the API
//! - **`routes`** - Page handlers and router assembly
//! - **`server`** - Configuration, application state, initialization
//! - **`error`** - The API error taxonomy and its HTTP mapping
//!
//! # Session Model
//!
//! A session is a signed token (HMAC-SHA256, seven-day expiry) living
//! in an HTTP-only cookie named `session`. The token carries the user's
//! id, name, and email; the server stores nothing per session. Page
//! routes check only that the cookie exists; API routes verify the
//! signature and expiry on every request.
//!
//! # Usage
//!
//! ```rust,no_run
//! use taskdeck::server::config::AppConfig;
//! use taskdeck::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return `Result` and propagate with `?`. The HTTP
//! boundary converts everything into `error::ApiError`, which renders
//! as a JSON body of the shape `{"error": <message>, "status": <code>}`.

/// Accounts, sessions, and authentication endpoints
pub mod auth;

/// API error taxonomy and HTTP mapping
pub mod error;

/// Route gate and session verification middleware
pub mod middleware;

/// Page handlers and router assembly
pub mod routes;

/// Configuration, state, and server initialization
pub mod server;

/// Task model, store, endpoints, and refresh broadcast
pub mod tasks;
