use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::risk::RegulatoryTier;

/// Service-level terms of the contract covering a device.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContractContext {
    /// Opaque contract identifier.
    pub contract_id: String,
    /// Agreed repair window in hours. Strictly positive; the engine guards
    /// a non-positive value to 1 hour if one ever slips past validation.
    pub repair_sla_hours: i64,
    /// Contractual penalty accrued per hour past the SLA, >= 0.
    pub sla_penalty_per_hour: f64,
    /// Compliance sensitivity of the contract.
    pub regulatory_tier: RegulatoryTier,
}
