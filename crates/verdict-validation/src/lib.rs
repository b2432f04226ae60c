//! # verdict-validation
//!
//! Input-validation boundary for the Verdict policy engine.
//!
//! The engine assumes already-validated inputs; this crate is where
//! malformed payloads are rejected before they reach it:
//!
//! - `failure_probability` finite and within [0.0, 1.0]
//! - `repair_sla_hours` strictly positive
//! - `sla_penalty_per_hour` finite and non-negative
//!
//! Tier labels are checked at parse time by
//! [`RegulatoryTier`](verdict_core::risk::RegulatoryTier)'s `FromStr` and
//! serde impls, so a constructed [`ContractContext`] already carries a
//! valid tier.
//!
//! [`ContractContext`]: verdict_core::models::ContractContext

pub mod boundary;

pub use boundary::{validate_contract, validate_request, validate_signal, RequestValidator};
