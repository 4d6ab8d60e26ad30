//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be a valid absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// Response for a newly created short link.
///
/// `shorten_url` carries the short code; clients resolve it as `/{shorten_url}`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub shorten_url: String,
}
