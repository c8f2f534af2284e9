//! # External Call Handler
//!
//! Issues a single outbound HTTP request to a third-party endpoint so
//! traces gain a real downstream dependency segment. The HTTP client is
//! scoped to the request: built on entry, dropped on every exit path.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::utils::constant::EXTERNAL_CALL_TIMEOUT;

/// Response wrapping the upstream payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExternalCallResult {
    pub external_response: Value,
    pub status: String,
}

/// Calls the configured external service and returns its JSON body.
///
/// GET /api/external
///
/// The upstream body must decode as JSON; the decoded value is passed
/// through untouched. Any outbound failure (including a body that is
/// not JSON) is logged here and collapsed into a fixed 503 so upstream
/// details never leak to the caller.
///
/// # Returns
///
/// - `200 OK` with [`ExternalCallResult`] - upstream answered with JSON
/// - `503 Service Unavailable` - the outbound call failed
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn call_external_service(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ExternalCallResult>> {
    info!("Calling external service");

    let client = reqwest::Client::builder()
        .timeout(EXTERNAL_CALL_TIMEOUT)
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

    match fetch_json(&client, &state.external_api_url).await {
        Ok(payload) => {
            info!("External service call succeeded");
            Ok(Json(ExternalCallResult {
                external_response: payload,
                status: "success".to_string(),
            }))
        }
        Err(e) => {
            error!(error = %e, "External service call failed");
            Err(AppError::ServiceUnavailable("External service unavailable"))
        }
    }
}

/// Issues the GET and decodes the body, collapsing transport and decode
/// failures into the one error type.
async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, reqwest::Error> {
    client.get(url).send().await?.json::<Value>().await
}
