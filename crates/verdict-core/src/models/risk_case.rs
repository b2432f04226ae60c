use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Assessment;
use crate::risk::RiskCategory;

/// Downstream record tracking a materialized high-risk finding.
///
/// Opened by a downstream workflow when a finding needs follow-up; the
/// policy engine itself never constructs one.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskCase {
    /// Case identifier (UUID v4).
    pub id: String,
    pub device_id: String,
    pub contract_id: String,
    pub category: RiskCategory,
    pub risk_score: f64,
    /// Creation timestamp, UTC, set at construction time.
    pub created_at: DateTime<Utc>,
}

impl RiskCase {
    /// Open a case for an assessment.
    pub fn open(
        device_id: impl Into<String>,
        contract_id: impl Into<String>,
        assessment: &Assessment,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            device_id: device_id.into(),
            contract_id: contract_id.into(),
            category: assessment.category,
            risk_score: assessment.risk_score,
            created_at: Utc::now(),
        }
    }
}
