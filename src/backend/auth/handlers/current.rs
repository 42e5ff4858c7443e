/**
 * Current User Handlers
 *
 * GET and PATCH /api/users/current. Both run behind the auth middleware, so
 * the user is already resolved from the `Authorization` header when they are
 * called.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{UpdateUserRequest, UserResponse, WebResponse};
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::{AppJson, AuthUser};

/// Get current user handler
///
/// ```http
/// GET /api/users/current HTTP/1.1
/// Authorization: 0b5f6a86-2a8c-4a1c-9d4e-1d3c1b0f8e2a
/// ```
pub async fn get_current(
    State(accounts): State<AccountService>,
    AuthUser(user): AuthUser,
) -> Json<WebResponse<UserResponse>> {
    Json(WebResponse::new(accounts.get(user)))
}

/// Update current user handler
///
/// Only the fields present in the body are changed; a new password is hashed
/// before it is stored.
///
/// # Errors
///
/// * `400 Bad Request` - If a supplied field is empty or too long
/// * `401 Unauthorized` - Rejected by the auth middleware
pub async fn update_current(
    State(accounts): State<AccountService>,
    AuthUser(user): AuthUser,
    AppJson(request): AppJson<UpdateUserRequest>,
) -> BackendResult<Json<WebResponse<UserResponse>>> {
    let user = accounts.update(user, request).await?;

    Ok(Json(WebResponse::new(user)))
}
