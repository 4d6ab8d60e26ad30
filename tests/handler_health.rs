mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use url_shortener::api::handlers::{docs_handler, health_handler};

#[sqlx::test]
async fn test_health_endpoint_success(pool: SqlitePool) {
    common::create_test_record(&pool, "health1", "https://example.com").await;
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 1 records");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_pool_closed(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status_service_unavailable();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_docs_lists_endpoints() {
    let app = Router::new().route("/docs", get(docs_handler));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/docs").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let paths: Vec<&str> = json["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"/shorten/"));
    assert!(paths.contains(&"/{short_code}"));
    assert!(paths.contains(&"/stats/"));
    assert!(paths.contains(&"/stats/{short_code}"));
}
