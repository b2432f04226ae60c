//! Fixed category → action mapping.

use std::str::FromStr;

use verdict_core::errors::PolicyError;
use verdict_core::risk::RiskCategory;

/// Recommended remediation action for a risk category.
///
/// Exhaustive by construction: adding a category fails compilation here
/// until a mapping exists.
pub fn recommend_action(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Critical => "Dispatch immediate intervention and trigger legal escalation.",
        RiskCategory::High => "Create risk case and schedule expedited repair.",
        RiskCategory::Medium => "Monitor closely and prepare contingency notice.",
        RiskCategory::Low => "Continue standard monitoring cycle.",
    }
}

/// Recommend from a serialized category label.
///
/// Fails with [`PolicyError::UnknownCategory`] for anything outside the
/// four known labels. A label can only drift at a process boundary, so a
/// failure here marks an internal inconsistency between the threshold
/// logic and this mapping: surface it loudly, never default.
pub fn recommend_action_for(label: &str) -> Result<&'static str, PolicyError> {
    RiskCategory::from_str(label).map(recommend_action)
}
