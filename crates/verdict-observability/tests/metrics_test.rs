use std::time::Duration;

use verdict_core::models::{ContractContext, PredictionSignal};
use verdict_core::risk::{RegulatoryTier, RiskCategory};
use verdict_observability::{
    EvaluationLog, EvaluationMetrics, EvaluationRecord, InstrumentedEngine, MetricsCollector,
};
use verdict_policy::PolicyEngine;

fn make_signal(failure_probability: f64) -> PredictionSignal {
    PredictionSignal {
        device_id: "dev-obs".to_string(),
        component: "pump".to_string(),
        failure_probability,
    }
}

fn make_contract(regulatory_tier: RegulatoryTier) -> ContractContext {
    ContractContext {
        contract_id: "ctr-obs".to_string(),
        repair_sla_hours: 24,
        sla_penalty_per_hour: 100.0,
        regulatory_tier,
    }
}

// ── EvaluationMetrics ────────────────────────────────────────────────────

#[test]
fn metrics_count_per_category_and_total() {
    let mut metrics = EvaluationMetrics::new();
    metrics.record(RiskCategory::Low, Duration::from_micros(10));
    metrics.record(RiskCategory::Low, Duration::from_micros(20));
    metrics.record(RiskCategory::Critical, Duration::from_micros(30));
    metrics.record_rejected();

    assert_eq!(metrics.requests_total, 3);
    assert_eq!(metrics.rejected_total, 1);
    assert_eq!(metrics.category_count(RiskCategory::Low), 2);
    assert_eq!(metrics.category_count(RiskCategory::Critical), 1);
    assert_eq!(metrics.category_count(RiskCategory::Medium), 0);
    assert_eq!(metrics.avg_latency(), Duration::from_micros(20));
}

#[test]
fn empty_metrics_report_zero_latency() {
    let metrics = EvaluationMetrics::new();
    assert_eq!(metrics.avg_latency(), Duration::ZERO);
}

#[test]
fn collector_snapshot_serializes_and_reset_clears() {
    let mut collector = MetricsCollector::new();
    collector
        .evaluation
        .record(RiskCategory::High, Duration::from_micros(50));

    let snapshot = collector.snapshot().unwrap();
    assert_eq!(snapshot["evaluation"]["requests_total"], 1);

    collector.reset();
    assert_eq!(collector.evaluation.requests_total, 0);
}

// ── EvaluationLog ────────────────────────────────────────────────────────

fn make_record(latency_micros: u64) -> EvaluationRecord {
    EvaluationRecord::new(
        "dev-log",
        "ctr-log",
        RiskCategory::Medium,
        0.5,
        Duration::from_micros(latency_micros),
    )
}

#[test]
fn log_retains_at_most_its_capacity() {
    let mut log = EvaluationLog::with_capacity(3);
    for i in 0..5 {
        log.record(make_record(i * 10));
    }
    assert_eq!(log.count(), 3);
    // Oldest entries were dropped.
    assert_eq!(log.records()[0].latency, Duration::from_micros(20));
}

#[test]
fn log_latency_statistics() {
    let mut log = EvaluationLog::new();
    for micros in [10, 20, 30, 40] {
        log.record(make_record(micros));
    }
    assert_eq!(log.avg_latency(), Duration::from_micros(25));
    assert_eq!(log.latency_percentile(1.0), Duration::from_micros(40));
    assert_eq!(log.latency_percentile(0.0), Duration::from_micros(10));
}

#[test]
fn empty_log_reports_zero_statistics() {
    let log = EvaluationLog::new();
    assert_eq!(log.avg_latency(), Duration::ZERO);
    assert_eq!(log.latency_percentile(0.5), Duration::ZERO);
}

// ── InstrumentedEngine ───────────────────────────────────────────────────

#[test]
fn instrumented_engine_passes_through_the_assessment() {
    let mut engine = InstrumentedEngine::new(PolicyEngine::new());
    let direct = PolicyEngine::new().evaluate(
        &make_signal(0.9),
        &make_contract(RegulatoryTier::Restricted),
    );
    let wrapped = engine.evaluate(
        &make_signal(0.9),
        &make_contract(RegulatoryTier::Restricted),
    );

    assert_eq!(wrapped.risk_score, direct.risk_score);
    assert_eq!(wrapped.category, direct.category);
    assert_eq!(wrapped.rationale, direct.rationale);
}

#[test]
fn instrumented_engine_records_each_evaluation() {
    let mut engine = InstrumentedEngine::new(PolicyEngine::new());
    engine.evaluate(&make_signal(0.05), &make_contract(RegulatoryTier::Standard));
    engine.evaluate(&make_signal(0.95), &make_contract(RegulatoryTier::Critical));
    engine.record_rejected();

    let metrics = &engine.metrics().evaluation;
    assert_eq!(metrics.requests_total, 2);
    assert_eq!(metrics.rejected_total, 1);
    assert_eq!(engine.log().count(), 2);
    assert_eq!(engine.log().records()[0].device_id, "dev-obs");
}
