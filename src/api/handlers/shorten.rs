//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten/`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "shorten_url": "aZ3kQ9x" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object with a string
/// `original_url`, or if the URL is malformed or not http(s).
/// Returns 500 Internal Server Error if no unique code could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state.url_service.create(payload.original_url).await?;

    Ok(Json(ShortenResponse {
        original_url: record.original_url,
        shorten_url: record.short_code,
    }))
}
