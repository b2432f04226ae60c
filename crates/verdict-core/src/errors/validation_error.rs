/// Input-boundary errors for malformed signal or contract payloads.
///
/// Raised before the policy engine is reached; the engine assumes
/// already-validated inputs and performs no checks of its own.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("failure_probability {value} is outside [0.0, 1.0]")]
    ProbabilityOutOfRange { value: f64 },

    #[error("failure_probability must be finite, got {value}")]
    NonFiniteProbability { value: f64 },

    #[error("repair_sla_hours must be positive, got {hours}")]
    NonPositiveSlaHours { hours: i64 },

    #[error("sla_penalty_per_hour must be >= 0, got {value}")]
    NegativePenalty { value: f64 },

    #[error("sla_penalty_per_hour must be finite, got {value}")]
    NonFinitePenalty { value: f64 },

    #[error("unknown regulatory tier: {value}")]
    UnknownTier { value: String },
}
