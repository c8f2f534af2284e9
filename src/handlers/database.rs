//! # Simulated Database Handler
//!
//! Returns a canned query result after a short suspension standing in
//! for a real database roundtrip. No storage is ever accessed.

use axum::Json;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{info, instrument};

use crate::utils::constant::DATABASE_QUERY_DELAY;

/// One row of the simulated result set.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseRecord {
    pub id: i64,
    pub name: String,
}

/// Simulated query result returned by the database endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseQueryResult {
    pub query: String,
    pub results: Vec<DatabaseRecord>,
    pub execution_time_ms: u64,
}

/// Simulates a database query with fixed results.
///
/// GET /api/database
///
/// # Returns
///
/// Always returns `200 OK` with the two-row canned result set.
#[instrument(fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn simulate_database_query() -> Json<DatabaseQueryResult> {
    info!("Simulating database call");

    sleep(DATABASE_QUERY_DELAY).await;

    Json(DatabaseQueryResult {
        query: "SELECT * FROM users".to_string(),
        results: vec![
            DatabaseRecord {
                id: 1,
                name: "Alice".to_string(),
            },
            DatabaseRecord {
                id: 2,
                name: "Bob".to_string(),
            },
        ],
        execution_time_ms: 200,
    })
}
