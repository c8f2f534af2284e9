//! # Application State
//!
//! Explicitly constructed server context handed to the router at
//! startup. There is no mutable state here: requests never share
//! anything beyond this read-only configuration.

use std::env;

use tracing::info;

use crate::utils::constant::DEFAULT_EXTERNAL_API_URL;

/// Application state shared across requests. Needs to be thread-safe.
#[derive(Debug)]
pub struct AppState {
    /// Upstream endpoint fetched by the external-call route.
    pub external_api_url: String,
}

impl AppState {
    /// Creates the application state with the provided upstream endpoint.
    pub fn new(external_api_url: String) -> Self {
        info!(
            external_api_url = %external_api_url,
            "Initializing application state"
        );

        Self { external_api_url }
    }

    /// Creates the application state from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `EXTERNAL_API_URL` - Overrides the upstream endpoint for the
    ///   external-call route. Defaults to the public demo endpoint.
    pub fn from_env() -> Self {
        let external_api_url =
            env::var("EXTERNAL_API_URL").unwrap_or_else(|_| DEFAULT_EXTERNAL_API_URL.to_string());

        Self::new(external_api_url)
    }
}
