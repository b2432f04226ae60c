use verdict_core::errors::ValidationError;
use verdict_core::models::{ContractContext, PredictionSignal};
use verdict_core::traits::IInputBoundary;

/// Check a prediction signal against the data-model invariants.
///
/// Out-of-range probabilities are rejected, never clamped silently.
pub fn validate_signal(signal: &PredictionSignal) -> Result<(), ValidationError> {
    let p = signal.failure_probability;
    if !p.is_finite() {
        return Err(ValidationError::NonFiniteProbability { value: p });
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(ValidationError::ProbabilityOutOfRange { value: p });
    }
    Ok(())
}

/// Check a contract context against the data-model invariants.
pub fn validate_contract(contract: &ContractContext) -> Result<(), ValidationError> {
    if contract.repair_sla_hours <= 0 {
        return Err(ValidationError::NonPositiveSlaHours {
            hours: contract.repair_sla_hours,
        });
    }
    let penalty = contract.sla_penalty_per_hour;
    if !penalty.is_finite() {
        return Err(ValidationError::NonFinitePenalty { value: penalty });
    }
    if penalty < 0.0 {
        return Err(ValidationError::NegativePenalty { value: penalty });
    }
    Ok(())
}

/// Check a full request, signal first.
pub fn validate_request(
    signal: &PredictionSignal,
    contract: &ContractContext,
) -> Result<(), ValidationError> {
    validate_signal(signal)?;
    validate_contract(contract)
}

/// Boundary component wrapping the validation checks with rejection logging.
///
/// Stateless; one instance can guard any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }
}

impl IInputBoundary for RequestValidator {
    fn validate_signal(&self, signal: &PredictionSignal) -> Result<(), ValidationError> {
        validate_signal(signal).inspect_err(|e| {
            tracing::warn!(device_id = %signal.device_id, error = %e, "rejected prediction signal");
        })
    }

    fn validate_contract(&self, contract: &ContractContext) -> Result<(), ValidationError> {
        validate_contract(contract).inspect_err(|e| {
            tracing::warn!(contract_id = %contract.contract_id, error = %e, "rejected contract context");
        })
    }
}
