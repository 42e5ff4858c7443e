//! Shared Error Types
//!
//! This module defines the errors produced while checking untrusted request
//! bodies. They are independent of the HTTP layer so that request schemas can
//! be validated anywhere (handlers, services, tests) and only converted to a
//! status code at the backend boundary.
//!
//! # Error Categories
//!
//! - `ValidationError` - One or more fields violated their schema
//! - `SerializationError` - The body could not be decoded at all
//!
//! # Usage
//!
//! ```rust
//! use account_service::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must not be empty");
//! assert!(error.to_string().contains("username"));
//! ```
use std::collections::BTreeMap;

use thiserror::Error;

/// Field name mapped to every message reported for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors raised while decoding or validating a request body
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// The body decoded but one or more fields are invalid
    #[error("Validation failed: {}", describe(.errors))]
    ValidationError {
        /// Every violation, grouped by field
        errors: FieldErrors,
    },

    /// JSON decoding error (malformed body, wrong content type)
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::ValidationError { errors }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

fn describe(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<validator::ValidationErrors> for SharedError {
    fn from(report: validator::ValidationErrors) -> Self {
        let mut errors = FieldErrors::new();
        for (field, violations) in report.field_errors() {
            let messages = violations
                .iter()
                .map(|violation| match &violation.message {
                    Some(message) => message.to_string(),
                    None => format!("is invalid ({})", violation.code),
                })
                .collect();
            errors.insert(field.to_string(), messages);
        }
        Self::ValidationError { errors }
    }
}
