#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use url_shortener::application::services::UrlService;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::state::AppState;
use url_shortener::utils::code_generator::Base62CodeGenerator;

pub async fn create_test_record(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (original_url, short_code) VALUES (?1, ?2) RETURNING id")
        .bind(url)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM urls WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let url_service = UrlService::new(repository, Base62CodeGenerator);

    AppState::new(Arc::new(url_service))
}
