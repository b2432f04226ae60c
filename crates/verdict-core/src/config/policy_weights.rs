use serde::{Deserialize, Serialize};

use super::defaults;

/// Tunable coefficients for the risk policy engine.
///
/// Set once at construction, never mutated per request; the same pair is
/// shared read-only across all concurrent evaluations. Hot-reloading
/// weights means replacing the whole engine instance, so a caller can
/// never observe a torn pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyWeights {
    /// How strongly the model's failure probability drives the score.
    /// Expected in (0.0, 1.0], not hard-enforced.
    pub model_confidence: f64,
    /// Small positive scaling factor applied to the SLA penalty rate.
    pub sla_sensitivity: f64,
}

impl Default for PolicyWeights {
    fn default() -> Self {
        Self {
            model_confidence: defaults::DEFAULT_MODEL_CONFIDENCE,
            sla_sensitivity: defaults::DEFAULT_SLA_SENSITIVITY,
        }
    }
}
