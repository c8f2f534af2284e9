//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::utils::constant::SERVICE_NAME;

/// Response returned by the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Health check endpoint that reports the service as healthy.
///
/// GET /health
///
/// This endpoint indicates the application is running and able to
/// respond to HTTP requests. It performs no dependency checks or
/// complex validation, so it succeeds for as long as the process is up.
///
/// # Returns
///
/// Always returns `200 OK` with `status == "healthy"`.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn health_check() -> Json<HealthResponse> {
    info!("Health check endpoint accessed");

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
