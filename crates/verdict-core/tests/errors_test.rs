use verdict_core::errors::*;

#[test]
fn validation_error_probability_out_of_range_carries_value() {
    let err = ValidationError::ProbabilityOutOfRange { value: 1.7 };
    let msg = err.to_string();
    assert!(msg.contains("1.7"), "error should contain the value");
    assert!(msg.contains("[0.0, 1.0]"));
}

#[test]
fn validation_error_non_positive_sla_hours_carries_hours() {
    let err = ValidationError::NonPositiveSlaHours { hours: -4 };
    assert!(err.to_string().contains("-4"));
}

#[test]
fn validation_error_negative_penalty_carries_value() {
    let err = ValidationError::NegativePenalty { value: -250.0 };
    assert!(err.to_string().contains("-250"));
}

#[test]
fn validation_error_unknown_tier_carries_label() {
    let err = ValidationError::UnknownTier {
        value: "platinum".into(),
    };
    assert!(err.to_string().contains("platinum"));
}

#[test]
fn policy_error_unknown_category_carries_label() {
    let err = PolicyError::UnknownCategory {
        value: "severe".into(),
    };
    assert!(err.to_string().contains("severe"));
}

// --- From impls ---

#[test]
fn validation_error_converts_to_verdict_error() {
    let err = ValidationError::NonFiniteProbability { value: f64::NAN };
    let verdict_err: VerdictError = err.into();
    assert!(matches!(verdict_err, VerdictError::Validation(_)));
    assert!(verdict_err.to_string().contains("finite"));
}

#[test]
fn policy_error_converts_to_verdict_error() {
    let err = PolicyError::UnknownCategory {
        value: "bogus".into(),
    };
    let verdict_err: VerdictError = err.into();
    assert!(matches!(verdict_err, VerdictError::Policy(_)));
    assert!(verdict_err.to_string().contains("bogus"));
}
