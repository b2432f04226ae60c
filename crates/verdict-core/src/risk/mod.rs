pub mod category;
pub mod tier;

pub use category::RiskCategory;
pub use tier::RegulatoryTier;
