use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Device failure signal produced by the upstream prediction source.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionSignal {
    /// Opaque device identifier.
    pub device_id: String,
    /// Component the failure probability refers to.
    pub component: String,
    /// Failure probability in [0.0, 1.0]. Values outside the range are a
    /// contract violation rejected at the validation boundary, never
    /// clamped silently.
    pub failure_probability: f64,
}
