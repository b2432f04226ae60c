//! Span definitions per operation: validation and evaluation.
//!
//! Each span carries identifiers and outcome fields via the `tracing`
//! crate.

/// Create an evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($device_id:expr, $contract_id:expr) => {
        tracing::info_span!(
            "verdict.evaluation",
            device_id = %$device_id,
            contract_id = %$contract_id
        )
    };
}

/// Create a validation span.
#[macro_export]
macro_rules! validation_span {
    ($device_id:expr) => {
        tracing::info_span!("verdict.validation", device_id = %$device_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const EVALUATION: &str = "verdict.evaluation";
    pub const VALIDATION: &str = "verdict.validation";
}
