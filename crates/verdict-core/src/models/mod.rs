//! Value objects exchanged between the policy engine and its collaborators.
//!
//! All of these are plain data with no shared mutable state; an
//! `Assessment` is created fresh per evaluation and owned by the caller.

pub mod assessment;
pub mod contract;
pub mod risk_case;
pub mod signal;

pub use assessment::Assessment;
pub use contract::ContractContext;
pub use risk_case::RiskCase;
pub use signal::PredictionSignal;
