//! # Axum X-Ray Demo
//!
//! A small Axum service instrumented with `tracing`, built to exercise
//! request tracing end to end: a fixed greeting, a health probe, a
//! synthetic user lookup, one real outbound HTTP call, and a simulated
//! database query.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers, one per endpoint
//! - [`error`] - The closed error set and the global error boundary
//! - [`state`] - Server context constructed at startup
//! - [`telemetry`] - Tracing subscriber assembly (bunyan JSON output)
//! - [`utils`] - Service identity and latency constants

pub mod error;
pub mod handlers;
pub mod state;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    call_external_service, get_user, health_check, root, simulate_database_query,
};
use crate::state::AppState;

/// Creates an Axum router with the default upstream configuration.
///
/// This is a convenience function that calls [`app_with_external_url`]
/// with no explicit endpoint, causing it to consult `EXTERNAL_API_URL`
/// and fall back to the public demo endpoint.
#[inline]
pub fn app() -> Router {
    app_with_external_url(None)
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `external_api_url` - Optional upstream endpoint for the
///   external-call route. If None, the endpoint is taken from the
///   `EXTERNAL_API_URL` environment variable or its default.
///
/// # Returns
///
/// A configured Axum router with all application routes and the
/// request-tracing layer applied.
pub fn app_with_external_url(external_api_url: Option<String>) -> Router {
    let state = match external_api_url {
        Some(url) => Arc::new(AppState::new(url)),
        None => Arc::new(AppState::from_env()),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api/users/{user_id}", get(get_user))
        .route("/api/external", get(call_external_service))
        .route("/api/database", get(simulate_database_query))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
