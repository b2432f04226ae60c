//! Subscriber installation and span definitions.

pub mod spans;

use tracing_subscriber::EnvFilter;

use verdict_core::config::ObservabilityConfig;

/// Install the global tracing subscriber for this process.
///
/// `RUST_LOG` takes precedence over the configured log level. Fails if a
/// global subscriber is already set (e.g. by a test harness); callers
/// that can tolerate that should ignore the error.
pub fn init_tracing(
    config: &ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
    }
}
