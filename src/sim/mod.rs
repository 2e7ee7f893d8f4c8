//! Simulation driver and session lifecycle.

/// Synchronized dual-engine driver.
pub mod driver;

pub use driver::{MicroStepRecord, PipelineRecord, Simulator, Snapshot};
