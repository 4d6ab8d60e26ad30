//! Short link creation, resolution and statistics.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved_code};
use crate::utils::url_validator::validate_url;

/// Default number of insert attempts before giving up on a unique code.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Facade over the record store.
///
/// Owns the collision contract: generated codes are not unique by
/// construction, so [`Self::create`] inserts and retries with a fresh code
/// whenever the store reports a duplicate.
pub struct UrlService<R: UrlRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: G,
    max_attempts: usize,
}

impl<R: UrlRepository, G: CodeGenerator> UrlService<R, G> {
    /// Creates a new service with [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the number of insert attempts. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Shortens `original_url` and persists it with a zero counter.
    ///
    /// The same URL may be shortened any number of times; each call yields a
    /// new record.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is malformed (the store is not touched)
    /// - [`AppError::Internal`] if every attempt collided, or on database errors
    #[instrument(skip(self))]
    pub async fn create(&self, original_url: String) -> Result<UrlRecord, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=self.max_attempts {
            let short_code = self.generator.generate();

            if is_reserved_code(&short_code) {
                debug!(%short_code, attempt, "Generated reserved code, skipping");
                continue;
            }

            let new_record = NewUrlRecord {
                original_url: original_url.clone(),
                short_code,
            };

            match self.repository.create(new_record).await {
                Ok(record) => {
                    debug!(short_code = %record.short_code, id = record.id, "Short link created");
                    return Ok(record);
                }
                Err(e) if e.is_conflict() => {
                    warn!(attempt, max_attempts = self.max_attempts, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code and counts the access.
    ///
    /// The increment is a single atomic store operation, so concurrent
    /// redirects of the same code are all counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes; no record is created.
    #[instrument(skip(self))]
    pub async fn lookup_and_increment(&self, short_code: &str) -> Result<String, AppError> {
        self.repository
            .increment_clicks(short_code)
            .await?
            .map(|record| record.original_url)
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns a record without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    #[instrument(skip(self))]
    pub async fn get_stats(&self, short_code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns all records in storage order.
    pub async fn list_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list().await
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short_code": short_code }))
}
