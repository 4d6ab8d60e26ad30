//! Handler for single link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record behind a short code without counting a click.
///
/// # Endpoint
///
/// `GET /stats/{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.url_service.get_stats(&short_code).await?;

    Ok(Json(StatsResponse {
        stats: record.into(),
    }))
}
