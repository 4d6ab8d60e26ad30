//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and statistics routes.
///
/// Paths are declared without trailing slashes; the top-level router trims
/// them from incoming requests, so `/shorten/` and `/stats/` resolve here.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create a short link
/// - `GET  /stats`          - All records with click counts
/// - `GET  /stats/{code}`   - A single record
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{short_code}", get(stats_handler))
}
