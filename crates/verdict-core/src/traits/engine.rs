use crate::models::{Assessment, ContractContext, PredictionSignal};

/// Deterministic risk evaluation over already-validated inputs.
///
/// Implementations hold no mutable state across calls, so a single
/// instance is safe to share across any number of concurrent callers.
pub trait IPolicyEngine: Send + Sync {
    /// Map a prediction signal and contract context to an assessment.
    fn evaluate(&self, signal: &PredictionSignal, contract: &ContractContext) -> Assessment;
}
