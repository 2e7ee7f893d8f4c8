//! RISC pipeline execution engine.
//!
//! Models an in-order single-issue 5-stage pipeline with no hazard
//! detection: the generated programs are short straight-line sequences, so
//! the `hazard` and `stall` flags exist in the state but are never raised.

use super::pipeline::{empty_pipeline, PipelineStage, PIPELINE_DEPTH};
use crate::isa::{initial_risc_registers, Instruction, MemoryCell, Program, Register};
use serde::Serialize;

/// Fixed RISC instruction width in bytes.
pub const RISC_INSTRUCTION_BYTES: u64 = 4;

/// Complete architectural state of the RISC machine.
///
/// Register and memory values are seeded from the program image and left
/// untouched by stepping; only the pipeline bookkeeping, program counter,
/// and counters change. Each `step` produces a new snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiscState {
    pub registers: Vec<Register>,
    pub memory: Vec<MemoryCell>,
    /// Byte address of the next instruction to fetch; always a multiple
    /// of 4 and non-decreasing while instructions remain.
    pub pc: u64,
    pub current_cycle: u64,
    /// Static length of the instruction sequence.
    pub instruction_count: usize,
    pub completed_instructions: u64,
    pub pipeline: [PipelineStage; PIPELINE_DEPTH],
    /// Placeholder: hazard detection is not modeled.
    pub hazard: bool,
    /// Placeholder: stalling is not modeled.
    pub stall: bool,
}

impl RiscState {
    /// Initial state for `program`: empty pipeline, PC at 0, memory and
    /// registers at their seeded values.
    pub fn new(program: &Program) -> Self {
        Self {
            registers: initial_risc_registers(),
            memory: program.initial_memory.clone(),
            pc: 0,
            current_cycle: 0,
            instruction_count: program.risc_instructions.len(),
            completed_instructions: 0,
            pipeline: empty_pipeline(),
            hazard: false,
            stall: false,
        }
    }

    /// Advances the pipeline by one clock cycle, returning the new state.
    ///
    /// The shift register moves every occupant one stage forward
    /// (WB←MEM←EX←ID←IF), the instruction at the PC (if any) is fetched
    /// into IF, and the PC advances by one instruction width only when a
    /// fetch occurred. An instruction retires in the cycle it reaches WB,
    /// so `n` straight-line instructions complete after exactly `n + 4`
    /// cycles. Once fetch is exhausted the pipeline keeps draining;
    /// stepping a fully drained pipeline only advances the cycle counter.
    pub fn step(&self, instructions: &[Instruction]) -> Self {
        let mut next = self.clone();

        for i in (1..PIPELINE_DEPTH).rev() {
            let moved = next.pipeline[i - 1].instruction.take();
            next.pipeline[i].active = moved.is_some();
            next.pipeline[i].instruction = moved;
        }

        let index = (next.pc / RISC_INSTRUCTION_BYTES) as usize;
        if index < instructions.len() {
            next.pipeline[0].instruction = Some(instructions[index].clone());
            next.pipeline[0].active = true;
            next.pc += RISC_INSTRUCTION_BYTES;
        } else {
            next.pipeline[0].instruction = None;
            next.pipeline[0].active = false;
        }

        if next.pipeline[PIPELINE_DEPTH - 1].instruction.is_some() {
            next.completed_instructions += 1;
        }

        next.current_cycle += 1;
        next
    }

    /// Whether every instruction has retired.
    pub fn is_complete(&self) -> bool {
        self.completed_instructions >= self.instruction_count as u64
    }
}
