/**
 * Router Creation
 *
 * Assembles the public and authenticated route groups, the health check,
 * the JSON 404/405 fallbacks and the request tracing layer.
 */

use axum::{
    http::{Method, Uri},
    response::Json,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::backend::auth::handlers::types::WebResponse;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{public_routes, user_routes};
use crate::backend::server::state::AppState;

/// Create the application router
///
/// # Arguments
///
/// * `app_state` - Application state holding the account service
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(public_routes())
        .merge(user_routes(app_state.clone()))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<WebResponse<&'static str>> {
    Json(WebResponse::new("OK"))
}

async fn not_found(uri: Uri) -> BackendError {
    tracing::debug!("No route for {}", uri);
    BackendError::NotFound
}

async fn method_not_allowed(method: Method, uri: Uri) -> BackendError {
    tracing::debug!("Method {} not allowed for {}", method, uri);
    BackendError::MethodNotAllowed
}
