//! Integration tests for program generation.

use risc_cisc_sim::isa::program::{ADDR_OPERAND_A, ADDR_OPERAND_B, ADDR_RESULT};
use risc_cisc_sim::isa::{
    generate_program, initial_cisc_registers, initial_risc_registers, Operation,
};

/// Every generated program has exactly 4 RISC and 3 CISC instructions,
/// for either operation and arbitrary operands.
#[test]
fn test_instruction_counts_are_fixed() {
    for op in [Operation::Addition, Operation::Subtraction] {
        for (a, b) in [(0, 0), (10, 5), (1_000_000, 999_999), (7, 7)] {
            let program = generate_program(op, a, b);
            assert_eq!(program.risc_instructions.len(), 4);
            assert_eq!(program.cisc_instructions.len(), 3);
        }
    }
}

/// The initial memory image is `[A, B, 0]` at the fixed addresses.
#[test]
fn test_initial_memory_image() {
    let program = generate_program(Operation::Addition, 10, 5);
    let mem = &program.initial_memory;

    assert_eq!(mem.len(), 3);
    assert_eq!(mem[0].address, ADDR_OPERAND_A);
    assert_eq!(mem[0].value, 10);
    assert_eq!(mem[1].address, ADDR_OPERAND_B);
    assert_eq!(mem[1].value, 5);
    assert_eq!(mem[2].address, ADDR_RESULT);
    assert_eq!(mem[2].value, 0);
}

/// RISC instructions are fixed-width 4-byte single-cycle instructions at
/// consecutive word addresses.
#[test]
fn test_risc_encoding_shape() {
    let program = generate_program(Operation::Addition, 3, 4);

    for (i, instr) in program.risc_instructions.iter().enumerate() {
        assert_eq!(instr.size, 4);
        assert_eq!(instr.cycles, 1);
        assert_eq!(instr.address, (i as u64) * 4);
        assert_eq!(instr.binary.len(), 32);
    }
    assert_eq!(program.risc_code_size(), 16);
}

/// CISC instructions carry the variable cycle costs [2, 3, 2] and pack
/// into 6 bytes.
#[test]
fn test_cisc_encoding_shape() {
    let program = generate_program(Operation::Addition, 3, 4);

    let cycles: Vec<u32> = program.cisc_instructions.iter().map(|i| i.cycles).collect();
    assert_eq!(cycles, vec![2, 3, 2]);

    let addresses: Vec<u64> = program.cisc_instructions.iter().map(|i| i.address).collect();
    assert_eq!(addresses, vec![0x00, 0x02, 0x04]);

    assert_eq!(program.cisc_code_size(), 6);
}

/// The opcodes differ between the two operations only at the ALU step.
#[test]
fn test_operation_selects_alu_opcode() {
    let add = generate_program(Operation::Addition, 1, 2);
    let sub = generate_program(Operation::Subtraction, 1, 2);

    assert_eq!(add.risc_instructions[2].opcode, "ADD");
    assert_eq!(sub.risc_instructions[2].opcode, "SUB");
    assert_eq!(add.cisc_instructions[1].opcode, "ADD");
    assert_eq!(sub.cisc_instructions[1].opcode, "SUB");

    assert_eq!(add.risc_instructions[0], sub.risc_instructions[0]);
    assert_eq!(add.risc_instructions[3], sub.risc_instructions[3]);
}

/// The program description embeds the externally computed result.
#[test]
fn test_description_contains_result() {
    let add = generate_program(Operation::Addition, 10, 5);
    assert_eq!(add.description, "Calculate 10 + 5 = 15");

    let sub = generate_program(Operation::Subtraction, 20, 8);
    assert_eq!(sub.description, "Calculate 20 - 8 = 12");
}

/// Generation is deterministic: identical inputs give identical sequences.
#[test]
fn test_generation_is_deterministic() {
    let first = generate_program(Operation::Subtraction, -3, 9);
    let second = generate_program(Operation::Subtraction, -3, 9);

    assert_eq!(first.risc_instructions, second.risc_instructions);
    assert_eq!(first.cisc_instructions, second.cisc_instructions);
    assert_eq!(first.initial_memory, second.initial_memory);
}

/// Negative operands flow through unchanged.
#[test]
fn test_negative_operands() {
    let program = generate_program(Operation::Addition, -10, -5);
    assert_eq!(program.initial_memory[0].value, -10);
    assert_eq!(program.initial_memory[1].value, -5);
    assert_eq!(program.description, "Calculate -10 + -5 = -15");
}

/// The fixed register files have the documented names, all zeroed.
#[test]
fn test_initial_register_files() {
    let risc = initial_risc_registers();
    let names: Vec<&str> = risc.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["$zero", "$t0", "$t1", "$t2", "$t3", "PC"]);
    assert!(risc.iter().all(|r| r.value == 0));

    let cisc = initial_cisc_registers();
    let names: Vec<&str> = cisc.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["AX", "BX", "CX", "DX", "IP"]);
    assert!(cisc.iter().all(|r| r.value == 0));
}

/// `Operation::apply` computes the displayed result.
#[test]
fn test_operation_apply() {
    assert_eq!(Operation::Addition.apply(10, 5), 15);
    assert_eq!(Operation::Subtraction.apply(10, 5), 5);
    assert_eq!(Operation::Subtraction.apply(5, 10), -5);
}
