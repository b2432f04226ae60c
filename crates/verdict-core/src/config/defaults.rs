//! Default values shared between the config structs.

pub const DEFAULT_MODEL_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_SLA_SENSITIVITY: f64 = 0.00002;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TRACING_ENABLED: bool = false;
pub const DEFAULT_JSON_LOGS: bool = true;
