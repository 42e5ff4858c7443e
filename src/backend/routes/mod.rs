//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Account endpoints
//! ```
//!
//! # Route Types
//!
//! - `POST /api/users` - User registration
//! - `POST /api/users/login` - User login
//! - `GET /api/users/current` - Get current user
//! - `PATCH /api/users/current` - Update current user
//! - `DELETE /api/users/logout` - Logout
//! - `GET /health` - Liveness check
//!
//! Any other path returns `404 {"errors": "Not found"}`; a known path with the
//! wrong method returns `405 {"errors": "Method not allowed"}`.

/// Main router creation
pub mod router;

/// Account endpoints
pub mod api_routes;

pub use router::create_router;
