//! # verdict-core
//!
//! Foundation crate for the Verdict risk assessment system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod risk;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ObservabilityConfig, PolicyWeights, VerdictConfig};
pub use errors::{VerdictError, VerdictResult};
pub use models::{Assessment, ContractContext, PredictionSignal, RiskCase};
pub use risk::{RegulatoryTier, RiskCategory};
