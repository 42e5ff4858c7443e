//! Logout handler for DELETE /api/users/logout.

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::WebResponse;
use crate::backend::auth::service::AccountService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::AuthUser;

/// Clear the caller's token; the same token is rejected afterwards.
pub async fn logout(
    State(accounts): State<AccountService>,
    AuthUser(user): AuthUser,
) -> BackendResult<Json<WebResponse<&'static str>>> {
    let ack = accounts.logout(user).await?;

    Ok(Json(WebResponse::new(ack)))
}
