//! Error taxonomy for the Verdict workspace.
//!
//! Validation errors belong to the input boundary; policy errors are
//! internal contract violations. Neither is raised by the engine itself
//! for in-range inputs.

mod policy_error;
mod validation_error;

pub use policy_error::PolicyError;
pub use validation_error::ValidationError;

/// Umbrella error for fallible operations across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type VerdictResult<T> = Result<T, VerdictError>;
