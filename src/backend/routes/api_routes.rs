/**
 * API Routes
 *
 * Route table for the `/api/users` endpoints.
 *
 * # Routes
 *
 * ## Public
 *
 * - `POST /api/users` - Register
 * - `POST /api/users/login` - Login
 *
 * ## Authenticated (`Authorization: <token>`)
 *
 * - `GET /api/users/current` - Current user
 * - `PATCH /api/users/current` - Update current user
 * - `DELETE /api/users/logout` - Logout
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::handlers::{get_current, login, logout, register, update_current};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", post(register))
        .route("/api/users/login", post(login))
}

/// Routes guarded by the auth middleware
///
/// `route_layer` runs the middleware only for matched routes, so unknown
/// paths still fall through to the 404 handler instead of returning 401.
pub fn user_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users/current", get(get_current).patch(update_current))
        .route("/api/users/logout", delete(logout))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}
