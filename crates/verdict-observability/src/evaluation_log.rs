//! Evaluation logging: device, contract, category, score, latency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use verdict_core::risk::RiskCategory;

/// A single evaluation log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub device_id: String,
    pub contract_id: String,
    pub category: RiskCategory,
    pub risk_score: f64,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl EvaluationRecord {
    /// Create a new record with the timestamp set to now.
    pub fn new(
        device_id: impl Into<String>,
        contract_id: impl Into<String>,
        category: RiskCategory,
        risk_score: f64,
        latency: Duration,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            contract_id: contract_id.into(),
            category,
            risk_score,
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only log of recent evaluations for latency analysis.
#[derive(Debug, Clone, Default)]
pub struct EvaluationLog {
    records: Vec<EvaluationRecord>,
    /// Maximum records to retain (ring buffer behavior).
    max_records: usize,
}

impl EvaluationLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            max_records: 10_000,
        }
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_records: usize) -> Self {
        Self {
            records: Vec::new(),
            max_records,
        }
    }

    /// Record an evaluation.
    pub fn record(&mut self, record: EvaluationRecord) {
        self.records.push(record);
        if self.records.len() > self.max_records {
            self.records.drain(..self.records.len() - self.max_records);
        }
    }

    /// Get all records, oldest first.
    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }

    /// Average latency across all logged evaluations.
    pub fn avg_latency(&self) -> Duration {
        if self.records.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.records.iter().map(|r| r.latency).sum();
        total / self.records.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.records.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.records.iter().map(|r| r.latency).collect();
        latencies.sort();
        let idx = ((p * (latencies.len() - 1) as f64).round() as usize).min(latencies.len() - 1);
        latencies[idx]
    }

    /// Total number of logged evaluations.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
