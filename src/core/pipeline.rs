//! RISC 5-stage pipeline model.
//!
//! The pipeline is a fixed-length shift register of five stage slots in
//! hardware order: IF, ID, EX, MEM, WB. Each slot holds the instruction
//! currently occupying that stage, if any. The fixed length is enforced by
//! construction (`[PipelineStage; PIPELINE_DEPTH]`).

use crate::isa::Instruction;
use serde::Serialize;
use std::fmt;

/// Number of pipeline stages.
pub const PIPELINE_DEPTH: usize = 5;

/// The five pipeline stages in hardware order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StageName {
    /// Instruction fetch.
    If,
    /// Instruction decode.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Writeback.
    Wb,
}

impl StageName {
    /// All stages, in pipeline order.
    pub const ALL: [StageName; PIPELINE_DEPTH] = [
        StageName::If,
        StageName::Id,
        StageName::Ex,
        StageName::Mem,
        StageName::Wb,
    ];
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StageName::If => "IF",
            StageName::Id => "ID",
            StageName::Ex => "EX",
            StageName::Mem => "MEM",
            StageName::Wb => "WB",
        };
        write!(f, "{s}")
    }
}

/// One slot of the pipeline shift register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PipelineStage {
    /// Which stage this slot models.
    pub name: StageName,
    /// The instruction occupying the stage, if any.
    pub instruction: Option<Instruction>,
    /// Whether the stage is doing work this cycle.
    pub active: bool,
}

/// An empty pipeline: all five slots unoccupied and inactive.
pub fn empty_pipeline() -> [PipelineStage; PIPELINE_DEPTH] {
    StageName::ALL.map(|name| PipelineStage {
        name,
        instruction: None,
        active: false,
    })
}
