/**
 * Backend Error Types
 *
 * This module defines the errors returned by services and handlers.
 * Every variant maps to exactly one HTTP status code; the conversion into a
 * response body lives in `conversion.rs`.
 *
 * # Error Categories
 *
 * ## Client errors (400)
 *
 * - Schema violations and undecodable bodies (`Invalid`)
 * - Duplicate username on registration (`Conflict`)
 *
 * ## Authentication errors (401)
 *
 * - Wrong username or password on login
 * - Missing, unknown, cleared or expired session token
 *
 * ## Routing errors
 *
 * - Unknown path (404) or unsupported method on a known path (405)
 *
 * ## Internal errors (500)
 *
 * - Database and password hashing failures. Their details are logged and
 *   never sent to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

/// Message sent to the client for any internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use account_service::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("Username already exists");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::unauthorized("Unauthorized");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed to decode or violated its schema
    #[error(transparent)]
    Invalid(#[from] SharedError),

    /// Unique value already taken
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials or missing/invalid token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// No route matched
    #[error("Not found")]
    NotFound,

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Persistence failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Invalid` - 400 Bad Request
    /// - `Conflict` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    /// - `Store` - 500 Internal Server Error
    /// - `PasswordHash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Store(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is a server-side failure whose detail must stay private
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Get the message safe to show to the client
    pub fn message(&self) -> String {
        match self {
            Self::Invalid(SharedError::SerializationError { message }) => message.clone(),
            Self::Invalid(err) => err.to_string(),
            Self::Conflict { message } => message.clone(),
            Self::Unauthorized { message } => message.clone(),
            Self::NotFound | Self::MethodNotAllowed => self.to_string(),
            Self::Store(_) | Self::PasswordHash(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
