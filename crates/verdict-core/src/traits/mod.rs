pub mod boundary;
pub mod engine;

pub use boundary::IInputBoundary;
pub use engine::IPolicyEngine;
