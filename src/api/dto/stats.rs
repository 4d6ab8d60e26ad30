//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A stored record as exposed over HTTP.
///
/// The code goes out as `shorten_url`, the same key the shorten endpoint
/// returns it under.
#[derive(Debug, Serialize)]
pub struct UrlRecordDto {
    pub id: i64,
    pub original_url: String,
    #[serde(rename = "shorten_url")]
    pub short_code: String,
    pub click_count: i64,
}

impl From<UrlRecord> for UrlRecordDto {
    fn from(record: UrlRecord) -> Self {
        Self {
            id: record.id,
            original_url: record.original_url,
            short_code: record.short_code,
            click_count: record.click_count,
        }
    }
}

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: UrlRecordDto,
}

/// Statistics for every stored link, in storage order.
#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub stats: Vec<UrlRecordDto>,
}
