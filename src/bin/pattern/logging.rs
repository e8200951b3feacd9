//! Logging setup for the `pattern` tool, using `tracing_subscriber`.
//!
//! Standard output carries frames or decoded values, so every log line
//! goes to standard error.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides `directives`.
pub fn setup_logging(directives: &str, json: bool) {
    match json {
        true => setup_logging_json(directives),
        false => setup_logging_plain(directives),
    }
}

fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn setup_logging_json(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter(directives))
        .with(main_layer)
        .init()
}

fn setup_logging_plain(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter(directives))
        .with(main_layer)
        .init()
}
