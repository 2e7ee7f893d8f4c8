//! Execution engines for both architecture models.
//!
//! Each engine owns its architectural state and advances it exactly one
//! clock cycle per `step` call. Steps are functional: they return a fresh
//! state snapshot and never mutate the previous one, so history logs and
//! presentation-layer readers always observe whole, untorn states.

/// CISC micro-step execution engine.
pub mod cisc;

/// CISC micro-step (sub-instruction phase) model.
pub mod microstep;

/// RISC 5-stage pipeline model.
pub mod pipeline;

/// RISC pipeline execution engine.
pub mod risc;

pub use cisc::CiscState;
pub use microstep::{MicroStep, MicroStepName, MICRO_STEP_COUNT};
pub use pipeline::{PipelineStage, StageName, PIPELINE_DEPTH};
pub use risc::RiscState;
