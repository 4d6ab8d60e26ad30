//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single API over the store.
//!
//! - [`services::url_service::UrlService`] - Short link creation, resolution and statistics

pub mod services;
