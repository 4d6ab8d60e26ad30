//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Redirect to `/docs`
//! - `GET  /docs`            - API index
//! - `GET  /health`          - Health check
//! - `POST /shorten/`        - Create a short link
//! - `GET  /stats/`          - All records
//! - `GET  /stats/{code}`    - One record
//! - `GET  /{code}`          - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{docs_handler, health_handler, redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/docs", get(docs_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .route("/{short_code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
