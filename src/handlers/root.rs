//! # Root Handler
//!
//! Fixed greeting for the service root. This is the simplest traced
//! endpoint in the demo: no inputs, no failure modes.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::utils::constant::SERVICE_NAME;

/// Response returned by the root endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub service: String,
}

/// Returns the fixed service greeting.
///
/// GET /
///
/// # Returns
///
/// Always returns `200 OK` with the greeting payload.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn root() -> Json<GreetingResponse> {
    info!("Root endpoint called");

    Json(GreetingResponse {
        message: "Hello from Axum with OpenTelemetry!".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
