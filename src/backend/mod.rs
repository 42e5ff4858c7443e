//! Backend Module
//!
//! This module contains the HTTP server: routing, authentication, the account
//! service, persistence and error handling.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User model and store, tokens, account service, handlers
//! - **`middleware`** - Token authentication and JSON body extraction
//! - **`error`** - Backend error type and its JSON response format
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Accounts and sessions
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! router → auth middleware (protected routes) → `AppJson` extractor →
//! `AccountService` → `UserStore` → `{ "data": ... }` response. Any error on
//! the way becomes `{ "errors": ... }` with the matching status code.
//!
//! # State Management
//!
//! The only shared state is the `UserStore` handle inside `AppState`. It is
//! built once at startup from configuration and injected into every handler.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use auth::AccountService;
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
