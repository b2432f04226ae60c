use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::PolicyError;

/// Discrete risk category assigned to an assessment.
///
/// A closed set: adding a category is a compile-time-checked change for
/// every exhaustive match over it (thresholds, action mapping).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    /// All categories, in ascending severity order.
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Low,
        RiskCategory::Medium,
        RiskCategory::High,
        RiskCategory::Critical,
    ];

    /// Wire label for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
            RiskCategory::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(RiskCategory::Low),
            "medium" => Ok(RiskCategory::Medium),
            "high" => Ok(RiskCategory::High),
            "critical" => Ok(RiskCategory::Critical),
            other => Err(PolicyError::UnknownCategory {
                value: other.to_string(),
            }),
        }
    }
}
