//! Handler for listing all link statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored record with its click count.
///
/// # Endpoint
///
/// `GET /stats/`
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsListResponse>, AppError> {
    let records = state.url_service.list_all().await?;

    Ok(Json(StatsListResponse {
        stats: records.into_iter().map(Into::into).collect(),
    }))
}
