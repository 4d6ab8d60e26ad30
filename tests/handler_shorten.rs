mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use url_shortener::api::handlers::shorten_handler;

fn server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com");

    let code = json["shorten_url"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    assert_eq!(common::click_count(&pool, code).await, 0);
}

#[sqlx::test]
async fn test_shorten_same_url_twice_gives_distinct_codes(pool: SqlitePool) {
    let server = server(pool.clone());

    let first = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["shorten_url"], second["shorten_url"]);
    assert_eq!(common::record_count(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::record_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_empty_url(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::record_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_non_http_scheme(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid URL format");
    assert_eq!(common::record_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: SqlitePool) {
    let server = server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid request body");
}

#[sqlx::test]
async fn test_shorten_malformed_json(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .bytes("{\"original_url\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
    assert_eq!(common::record_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_embedded_newline(pool: SqlitePool) {
    let server = server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid URL format");
    assert_eq!(common::record_count(&pool).await, 0);
}
