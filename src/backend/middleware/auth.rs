/**
 * Authentication Middleware
 *
 * This module protects the routes that act on the current user. The token is
 * read from the `Authorization` header, resolved to a user through the
 * account service, and the user is attached to the request extensions for
 * the handlers downstream.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::service::{AccountService, UNAUTHORIZED};
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the raw token from the Authorization header
/// 2. Looks up the user holding that token
/// 3. Attaches the user to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the header is missing or the token is unknown,
/// cleared by logout, or expired.
pub async fn auth_middleware(
    State(accounts): State<AccountService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized(UNAUTHORIZED)
        })?;

    let user = accounts.authenticate(token).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the user resolved by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<User>().cloned().ok_or_else(|| {
            tracing::warn!("User not found in request extensions");
            BackendError::unauthorized(UNAUTHORIZED)
        })?;

        Ok(AuthUser(user))
    }
}
