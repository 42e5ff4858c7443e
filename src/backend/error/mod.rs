//! Backend Error Module
//!
//! This module defines the error type returned by every service, handler and
//! middleware of the server, and its conversion into a JSON response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust
//! use account_service::backend::error::BackendError;
//! use axum::response::IntoResponse;
//!
//! let response = BackendError::unauthorized("Unauthorized").into_response();
//! assert_eq!(response.status(), 401);
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};

/// Result alias used across the backend
pub type BackendResult<T> = Result<T, BackendError>;
