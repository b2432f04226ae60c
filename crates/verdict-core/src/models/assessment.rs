use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::risk::RiskCategory;

/// Output of one policy evaluation.
///
/// Immutable value object, created fresh per evaluation and owned by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    /// Final risk score, clamped to [0.0, 1.0] and rounded to 4 decimals.
    pub risk_score: f64,
    /// Category derived from the pre-rounded exposure.
    pub category: RiskCategory,
    /// Ordered explanatory strings for audit/traceability. Exactly three
    /// entries: failure probability, penalty rate, regulatory tier. Never
    /// used to recompute the score.
    pub rationale: Vec<String>,
}
