//! Process configuration, loaded once at startup.
//!
//! Every section and field is defaulted, so an empty TOML document yields
//! a fully usable configuration.

mod defaults;
mod observability_config;
mod policy_weights;

pub use observability_config::ObservabilityConfig;
pub use policy_weights::PolicyWeights;

use serde::{Deserialize, Serialize};

use crate::errors::VerdictResult;

/// Top-level configuration for a verdict process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictConfig {
    /// Policy engine weights.
    pub policy: PolicyWeights,
    /// Logging and tracing settings.
    pub observability: ObservabilityConfig,
}

impl VerdictConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(input: &str) -> VerdictResult<Self> {
        Ok(toml::from_str(input)?)
    }
}
