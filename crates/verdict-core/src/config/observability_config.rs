use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter applied when `RUST_LOG` is not set.
    pub log_level: String,
    /// Whether spans are recorded around engine calls.
    pub tracing_enabled: bool,
    /// Emit JSON-formatted log lines instead of compact text.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            tracing_enabled: defaults::DEFAULT_TRACING_ENABLED,
            json_logs: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
