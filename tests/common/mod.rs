#![allow(dead_code)]

use std::sync::Once;
use std::time::Duration;

use axum::{Json, Router, routing::get};
use axum_xray_demo::error::{AppError, AppResult};
use serde_json::Value;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("axum_xray_demo=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    // The default upstream is never contacted by tests that use this
    // entry point; external-call tests pass an explicit mock URL.
    spawn_app_with_external_url(None).await
}

/// Spawns the application with the external-call route pointed at the
/// given upstream, for exercising the outbound path against a local mock.
pub async fn spawn_app_with_external_url(external_api_url: Option<String>) -> String {
    let app = axum_xray_demo::app_with_external_url(external_api_url);
    serve(app).await
}

/// Spawns the application with an extra route whose handler always
/// fails with the catch-all error variant, to drive the global boundary.
pub async fn spawn_app_with_failing_route() -> String {
    let app = axum_xray_demo::app()
        .merge(Router::new().route("/api/broken", get(always_fails)));
    serve(app).await
}

async fn always_fails() -> AppResult<Json<Value>> {
    Err(AppError::Internal("simulated unhandled failure".to_string()))
}

/// Spawns a stub upstream that answers every request to `/` with the
/// given JSON body. Returns the stub's base URL.
pub async fn spawn_json_upstream(body: Value) -> String {
    let app = Router::new().route("/", get(move || async move { Json(body) }));
    serve(app).await
}

/// Spawns a stub upstream whose body is plain text rather than JSON.
pub async fn spawn_text_upstream() -> String {
    let app = Router::new().route("/", get(|| async { "upstream says hello" }));
    serve(app).await
}

/// Returns a URL on which nothing is listening.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    format!("http://127.0.0.1:{port}/")
}

/// Serves the router on a random local port and waits until it answers.
async fn serve(app: Router) -> String {
    init_tracing_once();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready; any response counts, 404 included
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    address
}
