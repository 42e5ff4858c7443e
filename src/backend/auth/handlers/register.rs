/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/users.
 *
 * # Registration Process
 *
 * 1. Validate username, password and name (1-100 characters each)
 * 2. Check that the username is not registered yet
 * 3. Hash the password using bcrypt
 * 4. Create the user in the database
 * 5. Return the public projection (no password, no token)
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterUserRequest, UserResponse, WebResponse};
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::AppJson;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing, empty or too long, or the
///   username already exists
/// * `500 Internal Server Error` - If hashing or the database fails
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "username": "test", "password": "password", "name": "test" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "data": { "username": "test", "name": "test" } }
/// ```
pub async fn register(
    State(accounts): State<AccountService>,
    AppJson(request): AppJson<RegisterUserRequest>,
) -> BackendResult<Json<WebResponse<UserResponse>>> {
    tracing::info!("Register request for username: {}", request.username);

    let user = accounts.register(request).await?;

    Ok(Json(WebResponse::new(user)))
}
