//! Integration tests for the RISC pipeline engine.

use risc_cisc_sim::core::{RiscState, PIPELINE_DEPTH};
use risc_cisc_sim::isa::{generate_program, Operation, Program};

fn addition_program() -> Program {
    generate_program(Operation::Addition, 10, 5)
}

/// Steps the state `n` times, returning the final snapshot.
fn step_n(state: RiscState, program: &Program, n: usize) -> RiscState {
    let mut current = state;
    for _ in 0..n {
        current = current.step(&program.risc_instructions);
    }
    current
}

/// A fresh state has an empty 5-slot pipeline and zeroed counters.
#[test]
fn test_initial_state() {
    let program = addition_program();
    let state = RiscState::new(&program);

    assert_eq!(state.pipeline.len(), PIPELINE_DEPTH);
    assert!(state.pipeline.iter().all(|s| s.instruction.is_none() && !s.active));
    assert_eq!(state.pc, 0);
    assert_eq!(state.current_cycle, 0);
    assert_eq!(state.completed_instructions, 0);
    assert_eq!(state.instruction_count, 4);
    assert!(!state.is_complete());
}

/// 4 instructions through a 5-stage pipeline finish in exactly 8 cycles.
#[test]
fn test_completes_in_eight_cycles() {
    let program = addition_program();
    let state = step_n(RiscState::new(&program), &program, 8);

    assert_eq!(state.completed_instructions, 4);
    assert_eq!(state.current_cycle, 8);
    assert!(state.is_complete());
}

/// Completion count is strictly below 4 before cycle 8 and never
/// decreases across steps.
#[test]
fn test_completed_is_monotone() {
    let program = addition_program();
    let mut state = RiscState::new(&program);
    let mut previous = 0;

    for _ in 0..7 {
        state = state.step(&program.risc_instructions);
        assert!(state.completed_instructions >= previous);
        assert!(state.completed_instructions < 4);
        previous = state.completed_instructions;
    }
}

/// The first instruction enters IF on cycle 1 and reaches WB on cycle 5;
/// one instruction retires per cycle from then on.
#[test]
fn test_pipeline_fill_and_retire_pattern() {
    let program = addition_program();
    let mut state = RiscState::new(&program);

    state = state.step(&program.risc_instructions);
    assert_eq!(
        state.pipeline[0].instruction.as_ref().map(|i| i.address),
        Some(0x00)
    );
    assert!(state.pipeline[0].active);

    state = step_n(state, &program, 4);
    assert_eq!(
        state.pipeline[4].instruction.as_ref().map(|i| i.address),
        Some(0x00)
    );
    assert_eq!(state.completed_instructions, 1);

    for expected in 2..=4 {
        state = state.step(&program.risc_instructions);
        assert_eq!(state.completed_instructions, expected);
    }
}

/// The PC stays a multiple of 4, never decreases, and holds once fetch
/// is exhausted.
#[test]
fn test_pc_advance_and_hold() {
    let program = addition_program();
    let mut state = RiscState::new(&program);
    let mut previous_pc = 0;

    for _ in 0..10 {
        state = state.step(&program.risc_instructions);
        assert_eq!(state.pc % 4, 0);
        assert!(state.pc >= previous_pc);
        previous_pc = state.pc;
    }
    assert_eq!(state.pc, 16);
}

/// After fetch exhaustion the pipeline drains; stepping a fully drained
/// pipeline keeps counting cycles without changing completion.
#[test]
fn test_drain_past_program_end() {
    let program = addition_program();
    let state = step_n(RiscState::new(&program), &program, 12);

    assert_eq!(state.completed_instructions, 4);
    assert_eq!(state.current_cycle, 12);
    assert!(state.pipeline.iter().all(|s| s.instruction.is_none()));
}

/// Steps are functional: the prior snapshot is never mutated.
#[test]
fn test_step_does_not_mutate_previous_state() {
    let program = addition_program();
    let initial = RiscState::new(&program);
    let before = initial.clone();

    let _ = initial.step(&program.risc_instructions);

    assert_eq!(initial, before);
}

/// Hazard and stall flags are placeholders and never raised.
#[test]
fn test_hazard_and_stall_stay_false() {
    let program = addition_program();
    let mut state = RiscState::new(&program);

    for _ in 0..10 {
        state = state.step(&program.risc_instructions);
        assert!(!state.hazard);
        assert!(!state.stall);
    }
}

/// Stepping never writes register or memory values; the result cell
/// stays 0 even after completion.
#[test]
fn test_registers_and_memory_untouched() {
    let program = addition_program();
    let initial = RiscState::new(&program);
    let finished = step_n(initial.clone(), &program, 8);

    assert_eq!(finished.registers, initial.registers);
    assert_eq!(finished.memory, initial.memory);
    assert_eq!(finished.memory[2].value, 0);
}

/// Stage slots keep their fixed names and order across stepping.
#[test]
fn test_stage_order_is_fixed() {
    let program = addition_program();
    let state = step_n(RiscState::new(&program), &program, 3);

    let names: Vec<String> = state.pipeline.iter().map(|s| s.name.to_string()).collect();
    assert_eq!(names, vec!["IF", "ID", "EX", "MEM", "WB"]);
}
