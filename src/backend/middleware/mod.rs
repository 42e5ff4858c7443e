//! Middleware Module
//!
//! Request processing that runs before the handlers:
//!
//! - **`auth`** - Token authentication for the current-user routes
//! - **`json`** - JSON body extractor whose rejections use the API error format
//!
//! # Example
//!
//! ```rust,no_run
//! use account_service::backend::middleware::auth_middleware;
//! use axum::middleware::from_fn_with_state;
//!
//! // protected = protected.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;
pub mod json;

pub use auth::{auth_middleware, AuthUser};
pub use json::AppJson;
