/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`:
 * 1. Open the PostgreSQL pool and run migrations
 * 2. Wrap the pool in `PgUserStore` and build `AppState`
 * 3. Create the router with all routes and middleware
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::users::PgUserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be reached or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router, ConfigError> {
    tracing::info!("Initializing account service");

    let pool = connect_database(config).await?;
    let store = Arc::new(PgUserStore::new(pool));

    let app_state = AppState::new(store, config.token_policy(), config.bcrypt_cost);

    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
