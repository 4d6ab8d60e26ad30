//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite. Long URLs get a
//! 7-character base-62 code; visiting the code redirects to the original URL
//! and increments its click counter.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and repository trait
//! - **Application Layer** ([`application`]) - The record store facade
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! cargo run
//!
//! curl -X POST localhost:3000/shorten/ -H 'content-type: application/json' \
//!      -d '{"original_url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::{AppState, DefaultUrlService};
    pub use crate::utils::code_generator::{Base62CodeGenerator, CodeGenerator};
}
