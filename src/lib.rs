//! RISC vs CISC Execution Comparison Simulator Library.
//!
//! This crate implements an educational, cycle-by-cycle simulator that
//! contrasts how a RISC machine and a CISC machine execute the same
//! arithmetic program (an addition or subtraction of two operands). The
//! RISC side models a classic 5-stage in-order pipeline; the CISC side
//! models variable-latency instructions consumed as sequential micro-steps.
//! Both machines share one clock and are always ticked together.
//!
//! # Architecture
//!
//! * **RISC**: fixed 4-byte instructions, 5-stage pipeline (Fetch, Decode,
//!   Execute, Memory, Writeback), one instruction fetched per cycle.
//! * **CISC**: variable-length instructions with per-instruction cycle
//!   costs, executed as Fetch/Decode/Execute/Writeback micro-steps.
//!
//! # Modules
//!
//! * `config`: Configuration loading and parsing.
//! * `core`: The two execution engines and their stage/micro-step models.
//! * `isa`: Instruction, register, and memory data model plus the program
//!   generator.
//! * `sim`: Simulation driver coordinating both engines.
//! * `stats`: Performance metrics derivation and reporting.

/// Configuration system for program selection, pacing, and tracing.
///
/// Loads and parses TOML configuration files to select the simulated
/// operation, its operands, the automatic-run interval, and trace output.
pub mod config;

/// Execution engines for both architecture models.
///
/// Implements the RISC 5-stage pipeline engine and the CISC micro-step
/// engine. Each engine advances exactly one clock cycle per step and
/// produces a fresh state snapshot rather than mutating in place.
pub mod core;

/// Instruction Set Architecture data model and program generation.
///
/// Defines instructions, registers, memory cells, and programs, and
/// generates the fixed RISC/CISC instruction sequences for an operation
/// over two operands.
pub mod isa;

/// Simulation driver and session lifecycle.
///
/// Owns both engine states, synchronized stepping, run/pause/reset
/// commands, per-cycle history logs, and read-only snapshots for a
/// presentation layer.
pub mod sim;

/// Performance metrics derivation and reporting.
///
/// Tracks cycle counts, instruction counts, CPI, efficiency, and code
/// size per architecture, and prints the end-of-run comparison report.
pub mod stats;
