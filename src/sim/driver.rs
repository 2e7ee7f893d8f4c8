//! Simulation driver coordinating both execution engines.
//!
//! One `Simulator` is one session: it owns the generated program, both
//! engine states, both metrics, and the per-cycle history logs. The two
//! engines share a single clock — every tick steps both exactly once,
//! whatever their individual completion state. A completed CISC engine
//! no-ops; the RISC engine keeps draining its pipeline after fetch
//! exhaustion.
//!
//! Continuous run mode is cooperative and pull-based: `run` arms the
//! driver, the host loop calls `poll` at its chosen cadence (sleeping
//! `speed_ms` between polls), and `pause` disarms it. Because nothing
//! fires asynchronously, `pause` deterministically prevents any further
//! automatic tick.

use crate::core::pipeline::{PipelineStage, PIPELINE_DEPTH};
use crate::core::{CiscState, RiscState};
use crate::isa::{generate_program, Operation, Program};
use crate::stats::Metrics;
use serde::Serialize;

/// Default automatic-run interval in milliseconds.
pub const DEFAULT_SPEED_MS: u64 = 500;

/// Snapshot of the RISC pipeline after one cycle.
#[derive(Clone, Debug, Serialize)]
pub struct PipelineRecord {
    pub cycle: u64,
    pub stages: [PipelineStage; PIPELINE_DEPTH],
}

/// Which micro-step of which CISC instruction consumed one cycle.
#[derive(Clone, Debug, Serialize)]
pub struct MicroStepRecord {
    pub cycle: u64,
    /// Index of the instruction being executed during the cycle.
    pub instruction: usize,
    /// Index of the micro-step phase consumed by the cycle.
    pub micro_step: usize,
}

/// Read-only view of an entire session, serializable for a
/// presentation layer.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub program: &'a Program,
    pub risc: &'a RiscState,
    pub cisc: &'a CiscState,
    pub risc_metrics: &'a Metrics,
    pub cisc_metrics: &'a Metrics,
    pub risc_result: Option<i64>,
    pub cisc_result: Option<i64>,
    pub is_running: bool,
    pub is_complete: bool,
    pub speed_ms: u64,
}

/// A complete simulation session over one generated program.
#[derive(Debug)]
pub struct Simulator {
    operation: Operation,
    operand_a: i64,
    operand_b: i64,
    program: Program,
    risc: RiscState,
    cisc: CiscState,
    risc_metrics: Metrics,
    cisc_metrics: Metrics,
    pipeline_history: Vec<PipelineRecord>,
    micro_step_history: Vec<MicroStepRecord>,
    running: bool,
    speed_ms: u64,
}

impl Simulator {
    /// Creates a session for `op` over `a` and `b`, both engines at
    /// cycle 0.
    pub fn new(op: Operation, a: i64, b: i64) -> Self {
        let program = generate_program(op, a, b);
        let risc = RiscState::new(&program);
        let cisc = CiscState::new(&program);
        let risc_metrics = Metrics::at_load(program.risc_instructions.len(), program.risc_code_size());
        let cisc_metrics = Metrics::at_load(program.cisc_instructions.len(), program.cisc_code_size());
        Self {
            operation: op,
            operand_a: a,
            operand_b: b,
            program,
            risc,
            cisc,
            risc_metrics,
            cisc_metrics,
            pipeline_history: Vec::new(),
            micro_step_history: Vec::new(),
            running: false,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }

    /// Advances both engines by one clock cycle.
    ///
    /// Metrics and history are updated only for an engine whose own cycle
    /// counter advanced, keeping the driver-side cycle count and the
    /// engine-side cycle count in agreement at all times. When both
    /// engines have completed, continuous mode disarms itself.
    pub fn step(&mut self) {
        let cisc_instr = self.cisc.pc;
        let cisc_micro = self.cisc.current_micro_step;

        let next_risc = self.risc.step(&self.program.risc_instructions);
        let next_cisc = self.cisc.step(&self.program.cisc_instructions);

        if next_risc.current_cycle > self.risc.current_cycle {
            self.risc_metrics.record_cycle(next_risc.completed_instructions);
            self.pipeline_history.push(PipelineRecord {
                cycle: next_risc.current_cycle,
                stages: next_risc.pipeline.clone(),
            });
        }
        if next_cisc.current_cycle > self.cisc.current_cycle {
            self.cisc_metrics.record_cycle(next_cisc.completed_instructions);
            self.micro_step_history.push(MicroStepRecord {
                cycle: next_cisc.current_cycle,
                instruction: cisc_instr,
                micro_step: cisc_micro,
            });
        }

        self.risc = next_risc;
        self.cisc = next_cisc;

        debug_assert_eq!(self.risc_metrics.total_cycles, self.risc.current_cycle);
        debug_assert_eq!(self.cisc_metrics.total_cycles, self.cisc.current_cycle);

        if self.is_complete() {
            self.running = false;
        }
    }

    /// Arms continuous mode. Does nothing if the program already ran to
    /// completion.
    pub fn run(&mut self) {
        if !self.is_complete() {
            self.running = true;
        }
    }

    /// Disarms continuous mode without touching simulation state.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Performs one automatic tick if continuous mode is armed. Returns
    /// whether a tick happened.
    pub fn poll(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.step();
        true
    }

    /// Restores both engines, metrics, and history to the initial state
    /// of the current program, and disarms continuous mode. Idempotent.
    pub fn reset(&mut self) {
        self.running = false;
        self.risc = RiscState::new(&self.program);
        self.cisc = CiscState::new(&self.program);
        self.risc_metrics = Metrics::at_load(
            self.program.risc_instructions.len(),
            self.program.risc_code_size(),
        );
        self.cisc_metrics = Metrics::at_load(
            self.program.cisc_instructions.len(),
            self.program.cisc_code_size(),
        );
        self.pipeline_history.clear();
        self.micro_step_history.clear();
    }

    /// Regenerates the program for new inputs and fully resets the
    /// session. In-flight simulation state never survives a program
    /// change.
    pub fn update_program(&mut self, op: Operation, a: i64, b: i64) {
        self.operation = op;
        self.operand_a = a;
        self.operand_b = b;
        self.program = generate_program(op, a, b);
        self.reset();
    }

    /// Sets the automatic-run interval. Any positive interval is
    /// accepted; practical bounds are the caller's concern.
    pub fn set_speed(&mut self, ms: u64) {
        self.speed_ms = ms;
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether both engines have retired every instruction.
    pub fn is_complete(&self) -> bool {
        self.risc.is_complete() && self.cisc.is_complete()
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operand_a(&self) -> i64 {
        self.operand_a
    }

    pub fn operand_b(&self) -> i64 {
        self.operand_b
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn risc_state(&self) -> &RiscState {
        &self.risc
    }

    pub fn cisc_state(&self) -> &CiscState {
        &self.cisc
    }

    pub fn risc_metrics(&self) -> &Metrics {
        &self.risc_metrics
    }

    pub fn cisc_metrics(&self) -> &Metrics {
        &self.cisc_metrics
    }

    pub fn pipeline_history(&self) -> &[PipelineRecord] {
        &self.pipeline_history
    }

    pub fn micro_step_history(&self) -> &[MicroStepRecord] {
        &self.micro_step_history
    }

    /// The RISC machine's result, available once its pipeline has retired
    /// every instruction. The engines never write the result into state;
    /// it is computed directly from the original operands.
    pub fn risc_result(&self) -> Option<i64> {
        self.risc
            .is_complete()
            .then(|| self.operation.apply(self.operand_a, self.operand_b))
    }

    /// The CISC machine's result, available once all instructions have
    /// completed.
    pub fn cisc_result(&self) -> Option<i64> {
        self.cisc
            .is_complete()
            .then(|| self.operation.apply(self.operand_a, self.operand_b))
    }

    /// A serializable read-only view of the whole session.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            program: &self.program,
            risc: &self.risc,
            cisc: &self.cisc,
            risc_metrics: &self.risc_metrics,
            cisc_metrics: &self.cisc_metrics,
            risc_result: self.risc_result(),
            cisc_result: self.cisc_result(),
            is_running: self.running,
            is_complete: self.is_complete(),
            speed_ms: self.speed_ms,
        }
    }
}
