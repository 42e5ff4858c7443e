/**
 * Application State Management
 *
 * `AppState` is the container shared by every handler. It holds the account
 * service, which in turn owns the injected `UserStore` handle. Cloning the
 * state only clones `Arc`s.
 *
 * The `FromRef` implementation lets handlers and middleware extract
 * `State<AccountService>` directly.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::service::AccountService;
use crate::backend::auth::sessions::TokenPolicy;
use crate::backend::auth::users::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// Account operations backed by the configured store
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenPolicy, bcrypt_cost: u32) -> Self {
        Self {
            accounts: AccountService::new(store, tokens, bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}
