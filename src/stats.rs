//! Performance metrics derivation and reporting.
//!
//! Tracks per-architecture cycle counts, instruction counts, CPI,
//! efficiency, and code size, and renders the end-of-run comparison
//! report contrasting the two machines.

use crate::isa::Program;
use serde::Serialize;

/// Derived performance metrics for one architecture.
///
/// The driver keeps one of these per engine and recomputes it after every
/// tick. `total_cycles` is deliberately tracked here as well as inside the
/// engine state; the driver only advances it in ticks where the engine's
/// own counter advanced, so the two always agree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Metrics {
    pub total_cycles: u64,
    /// Static instruction count of the loaded program.
    pub instruction_count: usize,
    pub completed_instructions: u64,
    /// Cycles per instruction; 0 until the first instruction completes.
    pub cpi: f64,
    /// Total encoded program size in bytes, fixed at load time.
    pub code_size: u32,
    /// Completed instructions per cycle; 0 while no cycle has elapsed.
    pub efficiency: f64,
}

impl Metrics {
    /// Metrics at program-load time: zero progress, code size fixed.
    pub fn at_load(instruction_count: usize, code_size: u32) -> Self {
        Self {
            total_cycles: 0,
            instruction_count,
            completed_instructions: 0,
            cpi: 0.0,
            code_size,
            efficiency: 0.0,
        }
    }

    /// Records one elapsed cycle and rederives CPI and efficiency from
    /// the engine's completed-instruction count.
    pub fn record_cycle(&mut self, completed_instructions: u64) {
        self.total_cycles += 1;
        self.completed_instructions = completed_instructions;
        self.cpi = if completed_instructions > 0 {
            self.total_cycles as f64 / completed_instructions as f64
        } else {
            0.0
        };
        self.efficiency = if self.total_cycles > 0 {
            completed_instructions as f64 / self.total_cycles as f64
        } else {
            0.0
        };
    }
}

/// Prints a formatted comparison of both architectures' metrics:
/// one block per architecture followed by the computed results.
pub fn print_comparison(
    program: &Program,
    risc: &Metrics,
    cisc: &Metrics,
    risc_result: Option<i64>,
    cisc_result: Option<i64>,
) {
    let fmt_result = |r: Option<i64>| match r {
        Some(v) => v.to_string(),
        None => "(incomplete)".to_string(),
    };

    println!("\n==========================================================");
    println!("RISC vs CISC EXECUTION STATISTICS");
    println!("==========================================================");
    println!("program                  {}", program.name);
    println!("description              {}", program.description);
    println!("----------------------------------------------------------");
    println!("RISC (5-stage pipeline)");
    println!("  cycles                 {}", risc.total_cycles);
    println!("  instructions           {}", risc.instruction_count);
    println!("  completed              {}", risc.completed_instructions);
    println!("  cpi                    {:.4}", risc.cpi);
    println!("  efficiency             {:.4}", risc.efficiency);
    println!("  code_size              {} bytes", risc.code_size);
    println!("  result                 {}", fmt_result(risc_result));
    println!("----------------------------------------------------------");
    println!("CISC (micro-stepped)");
    println!("  cycles                 {}", cisc.total_cycles);
    println!("  instructions           {}", cisc.instruction_count);
    println!("  completed              {}", cisc.completed_instructions);
    println!("  cpi                    {:.4}", cisc.cpi);
    println!("  efficiency             {:.4}", cisc.efficiency);
    println!("  code_size              {} bytes", cisc.code_size);
    println!("  result                 {}", fmt_result(cisc_result));
    println!("==========================================================");
}
