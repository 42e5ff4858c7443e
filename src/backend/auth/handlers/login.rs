/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/users/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Generate a random session token and store it on the user
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords both return 401 with the same
 *   message (no user enumeration)
 * - Password verification uses bcrypt
 * - Logging in again replaces the previous token
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginUserRequest, TokenResponse, WebResponse};
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::AppJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If username or password is empty
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If the database or bcrypt fails
///
/// # Example Response
///
/// ```json
/// { "data": { "token": "0b5f6a86-2a8c-4a1c-9d4e-1d3c1b0f8e2a" } }
/// ```
pub async fn login(
    State(accounts): State<AccountService>,
    AppJson(request): AppJson<LoginUserRequest>,
) -> BackendResult<Json<WebResponse<TokenResponse>>> {
    tracing::info!("Login request for: {}", request.username);

    let token = accounts.login(request).await?;

    Ok(Json(WebResponse::new(token)))
}
