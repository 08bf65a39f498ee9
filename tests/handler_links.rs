mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use urlhash::api::handlers::{links_handler, redirect_handler, shorten_handler};
use urlhash::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_links_empty() {
    let (state, _rx, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_links_returns_created_links_in_order() {
    let (state, _rx, repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "first123", "https://a.example").await;
    common::create_test_link(&repo, "second12", "https://b.example").await;

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["code"], "first123");
    assert_eq!(items[0]["long_url"], "https://a.example");
    assert_eq!(
        items[0]["short_url"],
        format!("{}/first123", common::TEST_BASE_URL)
    );
    assert_eq!(items[1]["code"], "second12");
}

#[tokio::test]
async fn test_links_reports_click_counts() {
    let (state, _rx, repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "counted12", "https://example.com").await;
    for _ in 0..3 {
        repo.increment_clicks("counted12").await.unwrap();
    }

    let response = server.get("/api/links").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json[0]["clicks"], 3);
}

#[tokio::test]
async fn test_resolve_miss_leaves_listing_unaffected() {
    let (state, _rx, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/api/links", get(links_handler))
        .route("/api/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let before = server.get("/api/links").await.json::<serde_json::Value>();

    server.get("/doesnotexist").await.assert_status_not_found();

    let after = server.get("/api/links").await.json::<serde_json::Value>();
    assert_eq!(before, after);
}
