//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shortify`                 - Create or look up a short URL
//! - `GET  /api/unshortify/{short_code}`  - Resolve a short code
//! - `GET  /health`                       - Health check: store and cache
//! - `GET  /health/ready`                 - Readiness: same checks, 503 without a store
//! - `GET  /health/live`                  - Liveness: no checks
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, liveness_handler, readiness_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes and per-request middleware, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/health/live", get(liveness_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] wrapped so `/api/shortify/`
/// and `/api/shortify` reach the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
