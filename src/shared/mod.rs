//! Shared Types
//!
//! Types that do not depend on the HTTP server: the validation error model and
//! the helper that runs request schemas.

pub mod error;
pub mod validation;

pub use error::{FieldErrors, SharedError};
pub use validation::validate;
