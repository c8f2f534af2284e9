//! # Telemetry Setup
//!
//! Assembles the tracing subscriber that turns the service's spans and
//! events into bunyan-formatted JSON lines, ready for collection by an
//! external agent such as an OpenTelemetry collector or the X-Ray
//! daemon. Application code only ever talks to the `tracing` facade;
//! this module is the single place where output format and filtering
//! are decided.

use tracing::{Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Builds the layered subscriber that filters by `RUST_LOG` and writes
/// bunyan-formatted JSON records to `sink`.
///
/// # Arguments
///
/// * `name` - Application name stamped on every emitted record
/// * `env_filter` - Filter directive used when `RUST_LOG` is unset
/// * `sink` - Destination for the formatted records
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs the subscriber process-wide. Call exactly once, at startup.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    set_global_default(subscriber).expect("Failed to set global tracing subscriber");
}
