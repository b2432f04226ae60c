/// Contract violations inside the policy layer.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A category label outside the closed four-member set reached the
    /// recommender. Indicates drift between the threshold logic and the
    /// action mapping, not a user error; surface loudly, never default.
    #[error("unknown risk category: {value}")]
    UnknownCategory { value: String },
}
