use verdict_core::config::ObservabilityConfig;
use verdict_observability::init_tracing;
use verdict_observability::tracing_setup::spans;

#[test]
fn init_tracing_installs_exactly_once() {
    let config = ObservabilityConfig::default();
    assert!(init_tracing(&config).is_ok());
    // A second install fails rather than silently replacing the subscriber.
    assert!(init_tracing(&config).is_err());
}

#[test]
fn span_macros_build_and_names_match() {
    let span = verdict_observability::evaluation_span!("dev-1", "ctr-1");
    drop(span);
    let span = verdict_observability::validation_span!("dev-1");
    drop(span);

    assert_eq!(spans::names::EVALUATION, "verdict.evaluation");
    assert_eq!(spans::names::VALIDATION, "verdict.validation");
}
