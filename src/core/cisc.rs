//! CISC micro-step execution engine.
//!
//! Instruction latency is entirely data-driven: each instruction carries
//! its own cycle cost, and the engine spends exactly that many micro-step
//! cycles on it before moving to the next one. There is no opcode-specific
//! logic here, so other cycle costs work unchanged.

use super::microstep::{fresh_micro_steps, MicroStep, MICRO_STEP_COUNT};
use crate::isa::{initial_cisc_registers, Instruction, MemoryCell, Program, Register};
use serde::Serialize;

/// Complete architectural state of the CISC machine.
///
/// As with the RISC side, register and memory values are seeded once and
/// never written by stepping; only micro-step bookkeeping, the instruction
/// pointer, and counters change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CiscState {
    pub registers: Vec<Register>,
    pub memory: Vec<MemoryCell>,
    /// Index of the current instruction (not a byte address). Advances by
    /// exactly 1 when the current instruction's cycle budget is exhausted.
    pub pc: usize,
    pub current_cycle: u64,
    /// Static length of the instruction sequence.
    pub instruction_count: usize,
    pub completed_instructions: u64,
    pub micro_steps: [MicroStep; MICRO_STEP_COUNT],
    /// Index of the micro-step consuming the next cycle.
    pub current_micro_step: usize,
    /// Number of micro-step phases per instruction.
    pub total_micro_steps: usize,
}

impl CiscState {
    /// Initial state for `program`: instruction pointer at 0, all
    /// micro-steps cleared.
    pub fn new(program: &Program) -> Self {
        Self {
            registers: initial_cisc_registers(),
            memory: program.initial_memory.clone(),
            pc: 0,
            current_cycle: 0,
            instruction_count: program.cisc_instructions.len(),
            completed_instructions: 0,
            micro_steps: fresh_micro_steps(),
            current_micro_step: 0,
            total_micro_steps: MICRO_STEP_COUNT,
        }
    }

    /// Advances execution by one clock cycle, returning the new state.
    ///
    /// If the instruction pointer is past the end of the sequence the
    /// state is terminal and returned unchanged. Otherwise one micro-step
    /// of the current instruction is consumed; when the instruction's
    /// declared cycle cost is exhausted it completes, the instruction
    /// pointer advances, and the micro-step flags reset for the next
    /// instruction.
    pub fn step(&self, instructions: &[Instruction]) -> Self {
        if self.pc >= instructions.len() {
            return self.clone();
        }

        let mut next = self.clone();
        let instr = &instructions[next.pc];

        for (i, micro) in next.micro_steps.iter_mut().enumerate() {
            micro.active = i == next.current_micro_step;
            micro.completed = i < next.current_micro_step;
        }

        next.current_micro_step += 1;

        if next.current_micro_step >= instr.cycles as usize {
            next.completed_instructions += 1;
            next.pc += 1;
            next.current_micro_step = 0;
            for micro in next.micro_steps.iter_mut() {
                micro.active = false;
                micro.completed = false;
            }
        }

        next.current_cycle += 1;
        next
    }

    /// Whether every instruction has completed.
    pub fn is_complete(&self) -> bool {
        self.completed_instructions >= self.instruction_count as u64
    }
}
