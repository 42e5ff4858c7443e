/**
 * Account Service
 *
 * Business logic behind the `/api/users` endpoints: registration, login,
 * token authentication, reading and updating the current user, and logout.
 *
 * The service owns no state besides its configuration. All persistence goes
 * through the injected `UserStore`, so the same code runs against PostgreSQL
 * in production and against mocks or in-memory stores in tests.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage and re-hashed on update
 * - Unknown usernames and wrong passwords produce the same 401 response
 * - Passwords and tokens are never logged
 */

use std::sync::Arc;

use bcrypt::{non_truncating_hash, non_truncating_verify, BcryptError};
use chrono::Utc;

use crate::backend::auth::handlers::types::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
};
use crate::backend::auth::sessions::TokenPolicy;
use crate::backend::auth::users::{NewUser, StoreError, User, UserChanges, UserStore};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::validate;

/// Returned for both unknown usernames and wrong passwords
pub const INVALID_CREDENTIALS: &str = "Username or password wrong";
/// Returned for missing, unknown or expired tokens
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const DUPLICATE_USERNAME: &str = "Username already exists";

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn UserStore>,
    tokens: TokenPolicy,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenPolicy, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new user and return its public projection
    ///
    /// # Errors
    ///
    /// * `Invalid` - If a field is empty or too long
    /// * `Conflict` - If the username is already registered
    pub async fn register(&self, request: RegisterUserRequest) -> BackendResult<UserResponse> {
        validate(&request)?;

        let count = self.store.count_by_username(&request.username).await?;
        if count > 0 {
            tracing::warn!("Username already exists: {}", request.username);
            return Err(BackendError::conflict(DUPLICATE_USERNAME));
        }

        let password = non_truncating_hash(&request.password, self.bcrypt_cost)?;

        // The unique constraint still decides when two registrations race
        let user = self
            .store
            .insert(NewUser {
                username: request.username,
                name: request.name,
                password,
            })
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(_) => BackendError::conflict(DUPLICATE_USERNAME),
                other => other.into(),
            })?;

        tracing::info!("User registered: {}", user.username);

        Ok(user.into())
    }

    /// Verify credentials and start a new session
    ///
    /// A successful login replaces any token issued earlier.
    pub async fn login(&self, request: LoginUserRequest) -> BackendResult<TokenResponse> {
        validate(&request)?;

        let user = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Login for unknown user: {}", request.username);
                BackendError::unauthorized(INVALID_CREDENTIALS)
            })?;

        // A password longer than bcrypt's input can never match a stored hash
        let matches = match non_truncating_verify(&request.password, &user.password) {
            Ok(matches) => matches,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => return Err(e.into()),
        };
        if !matches {
            tracing::warn!("Invalid password for user: {}", user.username);
            return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
        }

        let session = self.tokens.issue(Utc::now());
        let token = session.token.clone();
        self.store.set_session(&user.username, Some(session)).await?;

        tracing::info!("User logged in: {}", user.username);

        Ok(TokenResponse { token })
    }

    /// Resolve the user owning `token`
    pub async fn authenticate(&self, token: &str) -> BackendResult<User> {
        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        if token.is_empty() {
            return Err(BackendError::unauthorized(UNAUTHORIZED));
        }

        self.store
            .find_by_token(token, Utc::now())
            .await?
            .ok_or_else(|| {
                tracing::warn!("Rejected unknown or expired token");
                BackendError::unauthorized(UNAUTHORIZED)
            })
    }

    pub fn get(&self, user: User) -> UserResponse {
        user.into()
    }

    /// Apply the supplied fields to `user`
    pub async fn update(&self, user: User, request: UpdateUserRequest) -> BackendResult<UserResponse> {
        validate(&request)?;

        let password = match request.password {
            Some(password) => Some(non_truncating_hash(&password, self.bcrypt_cost)?),
            None => None,
        };
        let changes = UserChanges {
            name: request.name,
            password,
        };

        if changes.is_empty() {
            return Ok(user.into());
        }

        let updated = self.store.update(&user.username, changes).await?;
        tracing::info!("User updated: {}", updated.username);

        Ok(updated.into())
    }

    /// Clear the session token of `user`
    pub async fn logout(&self, user: User) -> BackendResult<&'static str> {
        self.store.set_session(&user.username, None).await?;
        tracing::info!("User logged out: {}", user.username);
        Ok("OK")
    }
}
