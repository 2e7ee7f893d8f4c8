//! CISC micro-step (sub-instruction phase) model.
//!
//! A CISC instruction is consumed as a sequence of micro-steps drawn from
//! four fixed phases in order: Fetch, Decode, Execute, Writeback. How many
//! of them an instruction actually uses is dictated by its declared cycle
//! cost, not by the engine.

use serde::Serialize;
use std::fmt;

/// Number of micro-step phases.
pub const MICRO_STEP_COUNT: usize = 4;

/// The four micro-step phases in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MicroStepName {
    Fetch,
    Decode,
    Execute,
    Writeback,
}

impl MicroStepName {
    /// All phases, in execution order.
    pub const ALL: [MicroStepName; MICRO_STEP_COUNT] = [
        MicroStepName::Fetch,
        MicroStepName::Decode,
        MicroStepName::Execute,
        MicroStepName::Writeback,
    ];

    fn description(self) -> &'static str {
        match self {
            MicroStepName::Fetch => "Fetch instruction from memory",
            MicroStepName::Decode => "Decode instruction",
            MicroStepName::Execute => "Execute operation",
            MicroStepName::Writeback => "Write result",
        }
    }
}

impl fmt::Display for MicroStepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MicroStepName::Fetch => "Fetch",
            MicroStepName::Decode => "Decode",
            MicroStepName::Execute => "Execute",
            MicroStepName::Writeback => "Writeback",
        };
        write!(f, "{s}")
    }
}

/// Progress marker for one micro-step phase of the current instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MicroStep {
    pub name: MicroStepName,
    pub description: String,
    /// Whether this phase is the one consuming the current cycle.
    pub active: bool,
    /// Whether this phase has already been consumed for the current
    /// instruction.
    pub completed: bool,
}

/// A fresh micro-step array: all four phases inactive and incomplete.
pub fn fresh_micro_steps() -> [MicroStep; MICRO_STEP_COUNT] {
    MicroStepName::ALL.map(|name| MicroStep {
        name,
        description: name.description().to_string(),
        active: false,
        completed: false,
    })
}
