//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check (public)
//! - `/v1/*`        - REST API (Bearer token required, rate limited per IP)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on the API
//! - **Authentication** - Bearer token on the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::ApiRateLimitLayer;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// `rate_limit` is optional so tests can drive the router without a peer
/// address; the server always passes one.
pub fn app_router(state: AppState, rate_limit: Option<ApiRateLimitLayer>) -> NormalizePath<Router> {
    let mut api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    if let Some(rate_limit) = rate_limit {
        api_router = api_router.layer(rate_limit);
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
