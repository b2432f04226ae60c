use crate::errors::ValidationError;
use crate::models::{ContractContext, PredictionSignal};

/// Input-validation boundary guarding the policy engine.
///
/// Malformed input must be rejected here, before it reaches an
/// [`IPolicyEngine`](crate::traits::IPolicyEngine) implementation.
pub trait IInputBoundary: Send + Sync {
    /// Check a prediction signal against the data-model invariants.
    fn validate_signal(&self, signal: &PredictionSignal) -> Result<(), ValidationError>;

    /// Check a contract context against the data-model invariants.
    fn validate_contract(&self, contract: &ContractContext) -> Result<(), ValidationError>;

    /// Check a full request, signal first.
    fn validate_request(
        &self,
        signal: &PredictionSignal,
        contract: &ContractContext,
    ) -> Result<(), ValidationError> {
        self.validate_signal(signal)?;
        self.validate_contract(contract)
    }
}
