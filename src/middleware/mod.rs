//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Middleware
//! runs ahead of handlers and decides whether, and where, a request
//! proceeds.
//!
//! # Architecture
//!
//! Two layers with deliberately different strictness:
//!
//! - **`gate`** - Navigation steering for page routes. Checks only that
//!   a session cookie is present and issues redirects. Cheap, runs on
//!   every request.
//! - **`auth`** - Identity for API routes. Fully verifies the session
//!   token and attaches the signed-in user to the request. Strict, runs
//!   only where handlers need to know who is calling.
//!
//! A request for a protected page with a forged cookie slips past the
//! gate, but every API call the resulting page makes fails here with
//! 401, so nothing of substance is ever served to it.

pub mod auth;
pub mod gate;

pub use auth::{session_middleware, CurrentUser, SessionUser};
pub use gate::route_gate;
