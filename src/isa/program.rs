//! Program generation for the two architecture variants.
//!
//! Given an operation and two operands this module produces the fixed
//! instruction sequences both engines execute: four 1-cycle RISC
//! instructions (load, load, ALU op, store) and three variable-cost CISC
//! instructions (memory-operand load, memory-operand ALU op, store). The
//! opcodes and encoding strings are illustrative, but the `(size, cycles)`
//! pairs are the authoritative timing inputs for the engines.

use super::{Instruction, MemoryCell, Operation, Program, Register};

/// Data-memory address holding operand A.
pub const ADDR_OPERAND_A: u64 = 0x100;
/// Data-memory address holding operand B.
pub const ADDR_OPERAND_B: u64 = 0x104;
/// Data-memory address of the result slot.
pub const ADDR_RESULT: u64 = 0x108;

/// Builds a RISC instruction: fixed 32-bit encoding, single pipeline cycle.
fn risc_instr(address: u64, opcode: &str, operands: &[&str], binary: &str, desc: String) -> Instruction {
    Instruction {
        address,
        opcode: opcode.to_string(),
        operands: operands.iter().map(|s| s.to_string()).collect(),
        binary: binary.to_string(),
        size: 4,
        cycles: 1,
        description: desc,
    }
}

/// Builds a CISC instruction with its variable length and cycle cost.
fn cisc_instr(
    address: u64,
    opcode: &str,
    operands: &[&str],
    binary: &str,
    size: u32,
    cycles: u32,
    desc: String,
) -> Instruction {
    Instruction {
        address,
        opcode: opcode.to_string(),
        operands: operands.iter().map(|s| s.to_string()).collect(),
        binary: binary.to_string(),
        size,
        cycles,
        description: desc,
    }
}

/// Generates the program for `op` over operands `a` and `b`.
///
/// Deterministic and total: any representable operand pair yields a valid
/// program with 4 RISC instructions, 3 CISC instructions, and a 3-cell
/// memory image `[A, B, 0]`.
pub fn generate_program(op: Operation, a: i64, b: i64) -> Program {
    let (alu_mnemonic, alu_binary, cisc_mnemonic, cisc_binary, alu_desc, cisc_desc) = match op {
        Operation::Addition => (
            "ADD",
            "00000001000010010101000000100000",
            "ADD",
            "03060401",
            "Add $t2 = $t0 + $t1".to_string(),
            format!("Add B ({b}) to AX"),
        ),
        Operation::Subtraction => (
            "SUB",
            "00000001000010010101000000100010",
            "SUB",
            "2B060401",
            "Subtract $t2 = $t0 - $t1".to_string(),
            format!("Subtract B ({b}) from AX"),
        ),
    };

    Program {
        name: op.to_string(),
        description: format!("Calculate {a} {} {b} = {}", op.symbol(), op.apply(a, b)),
        initial_memory: vec![
            MemoryCell {
                address: ADDR_OPERAND_A,
                value: a,
            },
            MemoryCell {
                address: ADDR_OPERAND_B,
                value: b,
            },
            MemoryCell {
                address: ADDR_RESULT,
                value: 0,
            },
        ],
        risc_instructions: vec![
            risc_instr(
                0x00,
                "LW",
                &["$t0", "0x100"],
                "10001100000010000000000100000000",
                format!("Load A ({a}) into $t0"),
            ),
            risc_instr(
                0x04,
                "LW",
                &["$t1", "0x104"],
                "10001100000010010000000100000100",
                format!("Load B ({b}) into $t1"),
            ),
            risc_instr(0x08, alu_mnemonic, &["$t2", "$t0", "$t1"], alu_binary, alu_desc),
            risc_instr(
                0x0C,
                "SW",
                &["$t2", "0x108"],
                "10101100000010100000000100001000",
                "Store result to memory".to_string(),
            ),
        ],
        cisc_instructions: vec![
            cisc_instr(
                0x00,
                "MOV",
                &["AX", "[0x100]"],
                "8B060001",
                2,
                2,
                format!("Load A ({a}) into AX"),
            ),
            cisc_instr(0x02, cisc_mnemonic, &["AX", "[0x104]"], cisc_binary, 2, 3, cisc_desc),
            cisc_instr(
                0x04,
                "MOV",
                &["[0x108]", "AX"],
                "89060801",
                2,
                2,
                "Store result to memory".to_string(),
            ),
        ],
    }
}

/// Initial RISC register file: hardwired zero, four temporaries, and a
/// program-counter mirror.
pub fn initial_risc_registers() -> Vec<Register> {
    vec![
        Register::new("$zero", 0),
        Register::new("$t0", 0),
        Register::new("$t1", 0),
        Register::new("$t2", 0),
        Register::new("$t3", 0),
        Register::new("PC", 0),
    ]
}

/// Initial CISC register file: four general-purpose registers and an
/// instruction-pointer mirror.
pub fn initial_cisc_registers() -> Vec<Register> {
    vec![
        Register::new("AX", 0),
        Register::new("BX", 0),
        Register::new("CX", 0),
        Register::new("DX", 0),
        Register::new("IP", 0),
    ]
}
