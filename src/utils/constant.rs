//! # Application Constants
//!
//! This module defines configuration constants used throughout the demo
//! service: the service identity, the simulated latencies, and the
//! outbound call policy.

use std::time::Duration;

/// Service identifier reported by the greeting and health endpoints.
pub const SERVICE_NAME: &str = "axum-xray-demo";

/// Address and port the HTTP server binds to.
pub const BIND_ADDR: &str = "0.0.0.0:8000";

/// Simulated lookup latency for the user endpoint.
///
/// The handler suspends for this duration before returning the
/// synthesized record, so traces show a realistic in-handler segment.
pub const USER_LOOKUP_DELAY: Duration = Duration::from_millis(100);

/// Simulated I/O latency for the database endpoint.
///
/// Matches the `execution_time_ms` value reported in the canned result.
pub const DATABASE_QUERY_DELAY: Duration = Duration::from_millis(200);

/// Total timeout for the outbound request made by the external endpoint.
///
/// The default upstream answers after a deliberate one-second delay;
/// ten seconds bounds how long the handler can stay suspended without
/// cutting slow-but-healthy responses short.
pub const EXTERNAL_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Default upstream endpoint for the external call.
///
/// Overridable through the `EXTERNAL_API_URL` environment variable.
pub const DEFAULT_EXTERNAL_API_URL: &str = "https://httpbin.org/delay/1";
