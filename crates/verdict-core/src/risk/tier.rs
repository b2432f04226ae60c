use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::ValidationError;

/// Compliance sensitivity classification of a contract.
///
/// Pure data: the numeric weight a tier carries lives in the policy
/// engine, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RegulatoryTier {
    Standard,
    Critical,
    Restricted,
}

impl RegulatoryTier {
    /// All tiers.
    pub const ALL: [RegulatoryTier; 3] = [
        RegulatoryTier::Standard,
        RegulatoryTier::Critical,
        RegulatoryTier::Restricted,
    ];

    /// Wire label for this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            RegulatoryTier::Standard => "standard",
            RegulatoryTier::Critical => "critical",
            RegulatoryTier::Restricted => "restricted",
        }
    }
}

impl fmt::Display for RegulatoryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegulatoryTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RegulatoryTier::Standard),
            "critical" => Ok(RegulatoryTier::Critical),
            "restricted" => Ok(RegulatoryTier::Restricted),
            other => Err(ValidationError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}
