mod common;

use common::spawn_app;

#[tokio::test]
async fn root_returns_the_fixed_greeting() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Body was not valid JSON");
    assert_eq!(body["message"], "Hello from Axum with OpenTelemetry!");
    assert_eq!(body["service"], "axum-xray-demo");
}
