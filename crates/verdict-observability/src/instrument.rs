use std::time::Instant;

use tracing::debug;

use verdict_core::models::{Assessment, ContractContext, PredictionSignal};
use verdict_core::traits::IPolicyEngine;

use crate::evaluation_log::{EvaluationLog, EvaluationRecord};
use crate::metrics::MetricsCollector;

/// Wraps a policy engine with timing, counters, and trace events.
///
/// The engine itself exposes no metrics; this wrapper is the
/// observability hook around its single entry point. Recording requires
/// `&mut self`: the collector lives outside the core and is the
/// caller's to synchronize.
pub struct InstrumentedEngine<E> {
    inner: E,
    metrics: MetricsCollector,
    log: EvaluationLog,
}

impl<E: IPolicyEngine> InstrumentedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            metrics: MetricsCollector::new(),
            log: EvaluationLog::new(),
        }
    }

    /// Evaluate through the inner engine, recording latency and counters.
    pub fn evaluate(
        &mut self,
        signal: &PredictionSignal,
        contract: &ContractContext,
    ) -> Assessment {
        let started = Instant::now();
        let assessment = self.inner.evaluate(signal, contract);
        let elapsed = started.elapsed();

        self.metrics.evaluation.record(assessment.category, elapsed);
        self.log.record(EvaluationRecord::new(
            signal.device_id.clone(),
            contract.contract_id.clone(),
            assessment.category,
            assessment.risk_score,
            elapsed,
        ));
        debug!(
            device_id = %signal.device_id,
            contract_id = %contract.contract_id,
            category = %assessment.category,
            risk_score = assessment.risk_score,
            latency_us = elapsed.as_micros() as u64,
            "policy evaluation"
        );

        assessment
    }

    /// Count a request the validation boundary rejected before evaluation.
    pub fn record_rejected(&mut self) {
        self.metrics.evaluation.record_rejected();
    }

    /// The collected metrics.
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// The evaluation log.
    pub fn log(&self) -> &EvaluationLog {
        &self.log
    }

    /// Unwrap back into the inner engine, discarding collected state.
    pub fn into_inner(self) -> E {
        self.inner
    }
}
