//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Static landing page
//! - `GET  /health`        - Health check (public)
//! - `/api/*`              - Core shortening API
//! - `/public/*`           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket over `/api`, optional so the
//!   handlers never rely on its presence

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Per-IP throttling policy applied in front of the API routes.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    pub per_second: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `throttle` - request-rate policy for `/api`; `None` disables
///   throttling (used by tests, where no peer address is available)
pub fn app_router(state: AppState, throttle: Option<Throttle>) -> Router {
    let mut api_router = api::routes::api_routes();
    if let Some(policy) = throttle {
        api_router = api_router.layer(rate_limit::layer(policy.per_second, policy.burst));
    }

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .route_service("/", ServeFile::new("public/index.html"))
        .nest_service("/public", ServeDir::new("public"))
        .with_state(state)
        .layer(tracing::layer())
}
