/**
 * Account Handler Types
 *
 * Request schemas and response payloads for the `/api/users` endpoints.
 * Requests derive `Validate`; their constraints are the single source of
 * truth for what an acceptable body looks like.
 */

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::backend::auth::users::User;

/// bcrypt only reads the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_bytes"));
    }
    Ok(())
}

/// Registration request
///
/// Missing fields decode as empty strings so they are reported as field
/// violations together with any other invalid field.
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub username: String,
    /// Plain text, hashed before storage
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_password_bytes", message = "must be at most 72 bytes"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct LoginUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub password: String,
}

/// Partial update of the current user; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    #[validate(custom(function = "validate_password_bytes", message = "must be at most 72 bytes"))]
    pub password: Option<String>,
}

/// Public projection of a user
///
/// The only user shape ever returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            name: user.name,
        }
    }
}

/// Login result
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

/// Success envelope: `{ "data": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebResponse<T> {
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
