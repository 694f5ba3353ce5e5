mod common;

use common::TestApp;
use serde_json::Value;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::spawn("http://127.0.0.1:1", Some("test-api-key")).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "arzttext-service-test");
}

#[tokio::test]
async fn health_check_works_without_api_key() {
    let app = TestApp::spawn("http://127.0.0.1:1", None).await;

    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
