use verdict_core::config::PolicyWeights;
use verdict_core::models::{ContractContext, PredictionSignal};
use verdict_core::risk::{RegulatoryTier, RiskCategory};

/// Exposure multiplier for compliance-sensitive tiers.
pub const ELEVATED_COMPLIANCE_FACTOR: f64 = 1.15;
/// Exposure multiplier for standard-tier contracts.
pub const STANDARD_COMPLIANCE_FACTOR: f64 = 1.0;

/// Category band lower bounds, evaluated on pre-rounded exposure.
/// Each bound is inclusive; the highest matching band wins.
pub const CRITICAL_THRESHOLD: f64 = 0.85;
pub const HIGH_THRESHOLD: f64 = 0.65;
pub const MEDIUM_THRESHOLD: f64 = 0.40;

const SCORE_SCALE: f64 = 10_000.0;

/// Exposure formula.
///
/// ```text
/// base     = failure_probability × model_confidence
/// sla      = sla_penalty_per_hour / max(repair_sla_hours, 1)
/// exposure = min(1.0, base + sla × sla_sensitivity) × compliance_factor
/// score    = round4(min(exposure, 1.0))
/// ```
///
/// The clamp runs twice on purpose: the inner `min` bounds only the
/// pre-multiplier sum, so an elevated compliance factor can push exposure
/// past 1.0 before the final clamp. The category is read off exposure
/// itself, post-multiplier, before the final clamp and rounding.
pub fn compute(
    signal: &PredictionSignal,
    contract: &ContractContext,
    weights: &PolicyWeights,
) -> ExposureBreakdown {
    let base = signal.failure_probability * weights.model_confidence;

    // Guarded division: a non-positive SLA window is treated as 1 hour.
    let sla_factor = contract.sla_penalty_per_hour / contract.repair_sla_hours.max(1) as f64;

    let compliance_factor = compliance_factor(contract.regulatory_tier);
    let exposure = (base + sla_factor * weights.sla_sensitivity).min(1.0) * compliance_factor;

    ExposureBreakdown {
        base,
        sla_factor,
        compliance_factor,
        exposure,
        risk_score: round_score(exposure.min(1.0)),
        category: category_for(exposure),
    }
}

/// Per-term breakdown of one exposure computation, for
/// debugging/observability.
#[derive(Debug, Clone)]
pub struct ExposureBreakdown {
    pub base: f64,
    pub sla_factor: f64,
    pub compliance_factor: f64,
    /// Pre-rounded, pre-final-clamp intermediate risk quantity.
    pub exposure: f64,
    /// Final clamped, 4-decimal score.
    pub risk_score: f64,
    pub category: RiskCategory,
}

/// Exposure multiplier for a regulatory tier.
pub fn compliance_factor(tier: RegulatoryTier) -> f64 {
    match tier {
        RegulatoryTier::Critical | RegulatoryTier::Restricted => ELEVATED_COMPLIANCE_FACTOR,
        RegulatoryTier::Standard => STANDARD_COMPLIANCE_FACTOR,
    }
}

/// Classify a pre-rounded exposure value into its category band.
pub fn category_for(exposure: f64) -> RiskCategory {
    if exposure >= CRITICAL_THRESHOLD {
        RiskCategory::Critical
    } else if exposure >= HIGH_THRESHOLD {
        RiskCategory::High
    } else if exposure >= MEDIUM_THRESHOLD {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

fn round_score(value: f64) -> f64 {
    (value * SCORE_SCALE).round() / SCORE_SCALE
}
