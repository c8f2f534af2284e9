use axum_xray_demo::app;
use axum_xray_demo::telemetry::{get_subscriber, init_subscriber};
use axum_xray_demo::utils::constant::{BIND_ADDR, SERVICE_NAME};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let subscriber = get_subscriber(SERVICE_NAME.into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let app = app();
    info!("Server starting at http://{BIND_ADDR}");

    let listener = TcpListener::bind(BIND_ADDR).await.unwrap();

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
