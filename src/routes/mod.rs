//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server. Routes are
//! organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and layering
//! - **`pages`** - HTML page handlers
//! - **`api_routes`** - JSON API endpoint wiring
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── pages.rs        - Page handlers
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Surface Map
//!
//! ## Pages (behind the route gate)
//!
//! - `GET /` - Landing / login (public)
//! - `GET /signup` - Account creation (public)
//! - `GET /dashboard` - Task dashboard (protected)
//!
//! ## API (gate-exempt; protected group verifies sessions itself)
//!
//! - `POST /api/auth/signup`, `POST /api/auth/login`,
//!   `POST /api/auth/logout` - public
//! - `GET /api/auth/me`, `GET|POST /api/tasks`,
//!   `PUT|DELETE /api/tasks/{id}`, `PATCH /api/tasks/{id}/status` -
//!   session required
//!
//! ## Static
//!
//! - `/static/*` from the `public` directory, gate-exempt

/// Main router creation
pub mod router;

/// Page handlers
pub mod pages;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
