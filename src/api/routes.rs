//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Core API routes.
///
/// # Endpoints
///
/// - `POST /shorturl`            - Create (or re-use) a short identifier
/// - `GET  /shorturl/{short_id}` - Redirect to the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_id}", get(resolve_handler))
}
