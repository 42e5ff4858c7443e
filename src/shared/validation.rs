//! Schema validation
//!
//! Request bodies are plain structs deriving [`validator::Validate`]; this
//! module runs the derived schema and turns the report into a
//! [`SharedError::ValidationError`] carrying every violation at once.

use validator::Validate;

use crate::shared::error::SharedError;

/// Run the schema declared on `value`.
pub fn validate<T: Validate>(value: &T) -> Result<(), SharedError> {
    value.validate().map_err(SharedError::from)
}
