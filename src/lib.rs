//! Account Service - Main Library
//!
//! A small REST service managing user accounts: registration, login with
//! server-side session tokens, reading and updating the current user, and
//! logout. Built on Axum, sqlx (PostgreSQL) and bcrypt.
//!
//! # Module Structure
//!
//! - **`shared`** - Types independent of the HTTP server
//!   - Validation error model
//!   - Schema validation helper
//!
//! - **`backend`** - The HTTP server
//!   - Router and authentication middleware
//!   - Account service and `UserStore` persistence
//!   - Configuration and error handling
//!
//! # Usage
//!
//! ```rust,no_run
//! use account_service::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Endpoints
//!
//! | Method | Path                 | Auth |
//! |--------|----------------------|------|
//! | POST   | `/api/users`         | no   |
//! | POST   | `/api/users/login`   | no   |
//! | GET    | `/api/users/current` | yes  |
//! | PATCH  | `/api/users/current` | yes  |
//! | DELETE | `/api/users/logout`  | yes  |
//!
//! Successful responses are `{ "data": ... }`, failures `{ "errors": ... }`.

/// Shared types and validation
pub mod shared;

/// Backend server-side code
pub mod backend;
