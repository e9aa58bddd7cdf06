mod common;

use axum_test::TestServer;
use serde_json::json;

use shortify::routes::router;

#[tokio::test]
async fn test_unshortify_round_trip() {
    let server = TestServer::new(router(common::create_test_state())).unwrap();

    let created = server
        .post("/api/shortify")
        .json(&json!({ "original_url": "https://example.com/a?b=c" }))
        .await
        .json::<serde_json::Value>();
    let code = created["short_code"].as_str().unwrap();

    let response = server.get(&format!("/api/unshortify/{code}")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["original_url"], "https://example.com/a?b=c");
    assert_eq!(json["short_code"], code);
    assert_eq!(json["short_url"], created["short_url"]);
}

#[tokio::test]
async fn test_unshortify_unknown_code() {
    let server = TestServer::new(router(common::create_test_state())).unwrap();

    let response = server.get("/api/unshortify/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short_code"], "zzzzzz");
}
