//! URL record entity: a short code mapped to its destination.

/// A persisted short link with its access counter.
///
/// `original_url` and `short_code` are fixed at creation. `click_count` only
/// ever grows, one redirect at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, short_code: String, click_count: i64) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
        }
    }
}

/// Input data for creating a new record. The counter starts at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let record = UrlRecord::new(
            1,
            "https://example.com".to_string(),
            "abc1234".to_string(),
            0,
        );

        assert_eq!(record.id, 1);
        assert_eq!(record.original_url, "https://example.com");
        assert_eq!(record.short_code, "abc1234");
        assert_eq!(record.click_count, 0);
    }
}
