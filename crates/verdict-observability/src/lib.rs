//! # verdict-observability
//!
//! In-process metrics collection, a bounded evaluation log, structured
//! tracing setup, and an instrumented engine wrapper.
//!
//! Nothing here exports metrics anywhere; collectors are plain
//! serializable state the embedding process exposes however it likes.
//! The policy engine itself stays observability-free; this crate wraps
//! its single entry point from the outside.

pub mod evaluation_log;
pub mod instrument;
pub mod metrics;
pub mod tracing_setup;

pub use evaluation_log::{EvaluationLog, EvaluationRecord};
pub use instrument::InstrumentedEngine;
pub use metrics::{EvaluationMetrics, MetricsCollector};
pub use tracing_setup::init_tracing;
