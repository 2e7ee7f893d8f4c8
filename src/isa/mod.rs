//! ISA data model shared by both architecture variants.
//!
//! The simulator compares two illustrative instruction sets: a MIPS-like
//! RISC encoding (fixed 4-byte instructions) and an x86-like CISC encoding
//! (variable-length instructions with per-instruction cycle costs). The
//! types here are produced once by the program generator and never mutated
//! by the engines.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Program generation.
pub mod program;

pub use program::{generate_program, initial_cisc_registers, initial_risc_registers};

/// The arithmetic operation a generated program computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Operand A plus operand B.
    Addition,
    /// Operand A minus operand B.
    Subtraction,
}

impl Operation {
    /// Applies the operation to the two operands.
    ///
    /// The engines themselves never perform arithmetic; the displayed
    /// result is always computed here, directly from the original
    /// operands.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operation::Addition => a.wrapping_add(b),
            Operation::Subtraction => a.wrapping_sub(b),
        }
    }

    /// The infix symbol used in program descriptions.
    pub fn symbol(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Subtraction => '-',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition => write!(f, "Addition"),
            Operation::Subtraction => write!(f, "Subtraction"),
        }
    }
}

/// A single decoded instruction as laid out by the program generator.
///
/// Immutable once produced. The `size` and `cycles` fields are the
/// authoritative timing inputs for the engines: RISC instructions are
/// always 4 bytes and 1 cycle, CISC instructions carry their own
/// variable size and cycle cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Byte offset of the instruction within its program.
    pub address: u64,
    /// Mnemonic, e.g. `LW` or `MOV`.
    pub opcode: String,
    /// Operand strings as they would be rendered in assembly.
    pub operands: Vec<String>,
    /// Illustrative binary or hex encoding string.
    pub binary: String,
    /// Encoded size in bytes.
    pub size: u32,
    /// Declared cycle cost.
    pub cycles: u32,
    /// Human-readable description of the instruction's effect.
    pub description: String,
}

/// A named architectural register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Register {
    pub name: String,
    pub value: i64,
}

impl Register {
    pub fn new(name: &str, value: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// One data-memory word. Each program image has exactly three cells:
/// operand A, operand B, and the (never engine-written) result slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryCell {
    pub address: u64,
    pub value: i64,
}

/// A complete generated program: both instruction sequences plus the
/// initial memory image. Replacing the program invalidates all simulation
/// state.
#[derive(Clone, Debug, Serialize)]
pub struct Program {
    pub name: String,
    pub description: String,
    pub risc_instructions: Vec<Instruction>,
    pub cisc_instructions: Vec<Instruction>,
    pub initial_memory: Vec<MemoryCell>,
}

impl Program {
    /// Total encoded size in bytes of the RISC sequence.
    pub fn risc_code_size(&self) -> u32 {
        self.risc_instructions.iter().map(|i| i.size).sum()
    }

    /// Total encoded size in bytes of the CISC sequence.
    pub fn cisc_code_size(&self) -> u32 {
        self.cisc_instructions.iter().map(|i| i.size).sum()
    }
}
