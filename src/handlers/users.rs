//! # User Lookup Handler
//!
//! Synthesizes a user record for a requested id. No storage is
//! involved: the record is derived deterministically from the id, and a
//! short suspension stands in for the latency a real lookup would add
//! to the trace.

use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::utils::constant::USER_LOOKUP_DELAY;

/// Synthesized user record returned by the lookup endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: String,
    pub email: String,
}

/// Looks up a user by id.
///
/// GET /api/users/{user_id}
///
/// The id must be a positive integer within the simulated range
/// `1..=1000`. Ids inside the range always resolve; the record is
/// computed from the id, never fetched.
///
/// # Returns
///
/// - `200 OK` with [`UserRecord`] - id within the simulated range
/// - `400 Bad Request` - id is not positive
/// - `404 Not Found` - id is beyond the simulated range
#[instrument(skip_all, fields(user_id = user_id, request_id = %uuid::Uuid::new_v4()))]
pub async fn get_user(Path(user_id): Path<i64>) -> AppResult<Json<UserRecord>> {
    info!("Getting user {user_id}");

    if user_id < 1 {
        warn!("Rejected non-positive user id");
        return Err(AppError::BadRequest("User ID must be positive"));
    }

    if user_id > 1000 {
        return Err(AppError::NotFound("User not found"));
    }

    sleep(USER_LOOKUP_DELAY).await;

    Ok(Json(UserRecord {
        user_id,
        name: format!("User {user_id}"),
        email: format!("user{user_id}@example.com"),
    }))
}
