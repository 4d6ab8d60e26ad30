//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::utils::code_generator::Base62CodeGenerator;

/// The production service wiring: SQLite storage with random base-62 codes.
pub type DefaultUrlService = UrlService<SqliteUrlRepository, Base62CodeGenerator>;

/// State shared by all request handlers.
///
/// Cloning is cheap; the service and its connection pool live behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<DefaultUrlService>,
}

impl AppState {
    pub fn new(url_service: Arc<DefaultUrlService>) -> Self {
        Self { url_service }
    }
}
