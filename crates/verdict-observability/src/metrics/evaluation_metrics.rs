//! Request counters and latency accounting for policy evaluations.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use verdict_core::risk::RiskCategory;

/// Counters for policy evaluations served by this process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    /// Total evaluations performed.
    pub requests_total: u64,
    /// Requests rejected by the validation boundary before evaluation.
    pub rejected_total: u64,
    /// Evaluations per category, indexed by ascending severity.
    by_category: [u64; 4],
    /// Cumulative evaluation latency in microseconds.
    total_latency_micros: u64,
}

impl EvaluationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed evaluation.
    pub fn record(&mut self, category: RiskCategory, latency: Duration) {
        self.requests_total += 1;
        self.by_category[category as usize] += 1;
        self.total_latency_micros += latency.as_micros() as u64;
    }

    /// Record a request the boundary rejected before evaluation.
    pub fn record_rejected(&mut self) {
        self.rejected_total += 1;
    }

    /// Number of evaluations that landed in a category.
    pub fn category_count(&self, category: RiskCategory) -> u64 {
        self.by_category[category as usize]
    }

    /// Average evaluation latency across all recorded evaluations.
    pub fn avg_latency(&self) -> Duration {
        if self.requests_total == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.total_latency_micros / self.requests_total)
    }
}
