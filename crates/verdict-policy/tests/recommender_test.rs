use verdict_core::errors::PolicyError;
use verdict_core::risk::RiskCategory;
use verdict_policy::{recommend_action, recommend_action_for};

#[test]
fn each_category_maps_to_its_fixed_action() {
    assert_eq!(
        recommend_action(RiskCategory::Critical),
        "Dispatch immediate intervention and trigger legal escalation."
    );
    assert_eq!(
        recommend_action(RiskCategory::High),
        "Create risk case and schedule expedited repair."
    );
    assert_eq!(
        recommend_action(RiskCategory::Medium),
        "Monitor closely and prepare contingency notice."
    );
    assert_eq!(
        recommend_action(RiskCategory::Low),
        "Continue standard monitoring cycle."
    );
}

#[test]
fn recommendation_is_total_and_deterministic_over_all_categories() {
    for category in RiskCategory::ALL {
        let first = recommend_action(category);
        let second = recommend_action(category);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

#[test]
fn serialized_labels_resolve_to_the_same_actions() {
    for category in RiskCategory::ALL {
        let via_label = recommend_action_for(category.as_str()).unwrap();
        assert_eq!(via_label, recommend_action(category));
    }
}

#[test]
fn unknown_label_fails_with_unknown_category() {
    for label in ["", "severe", "LOW", "unknown", "critical "] {
        let err = recommend_action_for(label).unwrap_err();
        assert!(matches!(err, PolicyError::UnknownCategory { .. }), "{label:?}");
    }
}

#[test]
fn unknown_category_error_carries_the_offending_label() {
    let err = recommend_action_for("severe").unwrap_err();
    assert!(err.to_string().contains("severe"));
}
