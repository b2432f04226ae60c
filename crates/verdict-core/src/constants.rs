/// Verdict system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of explanatory entries attached to every assessment rationale.
pub const RATIONALE_ENTRIES: usize = 3;

/// Decimal places kept on a final risk score.
pub const RISK_SCORE_DECIMALS: u32 = 4;
