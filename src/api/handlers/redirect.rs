//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.url_service.lookup_and_increment(&short_code).await?;

    debug!(%short_code, "Redirecting");

    Ok(Redirect::to(&original_url))
}

/// Sends the bare root to the API index.
///
/// `GET /`
pub async fn root_handler() -> Redirect {
    Redirect::to("/docs")
}
