//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the domain-specific collectors and provides
//! a unified interface for recording and snapshotting metrics.

pub mod evaluation_metrics;

pub use evaluation_metrics::EvaluationMetrics;

use verdict_core::errors::VerdictResult;

/// Central metrics registry that owns all domain-specific collectors.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub evaluation: EvaluationMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics (useful for testing or periodic rotation).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Serialize the current metrics state to JSON.
    pub fn snapshot(&self) -> VerdictResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
