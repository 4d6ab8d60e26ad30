//! Core domain entities.
//!
//! - [`UrlRecord`] - A short code mapped to its destination URL
//! - [`NewUrlRecord`] - Creation input for a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
