use verdict_core::config::PolicyWeights;
use verdict_core::models::{Assessment, ContractContext, PredictionSignal};
use verdict_core::traits::IPolicyEngine;

use crate::formula::{self, ExposureBreakdown};

/// Risk policy engine combining a prediction signal and contract terms
/// under a fixed pair of weights.
///
/// Holds only its immutable [`PolicyWeights`]; `evaluate` writes no shared
/// state, so one instance serves any number of concurrent callers. To
/// change weights, construct a new engine and swap it in whole.
pub struct PolicyEngine {
    weights: PolicyWeights,
}

impl PolicyEngine {
    /// Create an engine with the production default weights.
    pub fn new() -> Self {
        Self {
            weights: PolicyWeights::default(),
        }
    }

    /// Create an engine from explicit weights. One engine per process (or
    /// per test), passed to callers rather than imported as global state.
    pub fn with_weights(weights: PolicyWeights) -> Self {
        Self { weights }
    }

    /// The weights this engine was constructed with.
    pub fn weights(&self) -> PolicyWeights {
        self.weights
    }

    /// Evaluate one signal/contract pair into an assessment.
    ///
    /// Pure computation; infallible for inputs that passed the validation
    /// boundary.
    pub fn evaluate(&self, signal: &PredictionSignal, contract: &ContractContext) -> Assessment {
        let breakdown = formula::compute(signal, contract, &self.weights);
        Assessment {
            risk_score: breakdown.risk_score,
            category: breakdown.category,
            rationale: rationale(signal, contract),
        }
    }

    /// Evaluate, also returning the per-term breakdown of the score.
    pub fn evaluate_with_breakdown(
        &self,
        signal: &PredictionSignal,
        contract: &ContractContext,
    ) -> (Assessment, ExposureBreakdown) {
        let breakdown = formula::compute(signal, contract, &self.weights);
        let assessment = Assessment {
            risk_score: breakdown.risk_score,
            category: breakdown.category,
            rationale: rationale(signal, contract),
        };
        (assessment, breakdown)
    }
}

/// The fixed three-entry audit rationale: probability, penalty rate, tier.
/// Explanatory only, never fed back into scoring.
fn rationale(signal: &PredictionSignal, contract: &ContractContext) -> Vec<String> {
    vec![
        format!(
            "model_failure_probability={:.3}",
            signal.failure_probability
        ),
        format!("sla_penalty_per_hour={}", contract.sla_penalty_per_hour),
        format!("regulatory_tier={}", contract.regulatory_tier),
    ]
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IPolicyEngine for PolicyEngine {
    fn evaluate(&self, signal: &PredictionSignal, contract: &ContractContext) -> Assessment {
        PolicyEngine::evaluate(self, signal, contract)
    }
}
