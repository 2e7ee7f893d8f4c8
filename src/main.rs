//! RISC vs CISC comparison simulator CLI.
//!
//! Runs the same arithmetic program on both architecture models and
//! reports the resulting timing metrics side by side.
//!
//! # Usage
//!
//! Two execution modes:
//! 1. **Continuous Mode** (default): ticks both engines at the configured
//!    interval until both complete, then prints the comparison report.
//! 2. **Manual Mode** (`--steps N`): performs exactly N clock ticks and
//!    reports whatever partial progress resulted.

use clap::Parser;
use std::{fs, thread, time::Duration};

use risc_cisc_sim::config::Config;
use risc_cisc_sim::isa::{Instruction, Operation};
use risc_cisc_sim::sim::Simulator;
use risc_cisc_sim::stats;

/// Practical bounds for the automatic-run interval. The driver itself
/// accepts any positive interval; the CLI keeps it in a usable range.
const SPEED_MIN_MS: u64 = 100;
const SPEED_MAX_MS: u64 = 1000;

/// Command-line arguments for the comparison simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "RISC vs CISC Execution Comparison Simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Arithmetic operation to simulate.
    #[arg(short, long, value_enum)]
    operation: Option<Operation>,

    /// First operand. Non-numeric input is coerced to 0.
    #[arg(short = 'a', long)]
    operand_a: Option<String>,

    /// Second operand. Non-numeric input is coerced to 0.
    #[arg(short = 'b', long)]
    operand_b: Option<String>,

    /// Automatic-run interval in milliseconds.
    #[arg(short, long)]
    speed: Option<u64>,

    /// Perform exactly N manual ticks instead of running to completion.
    #[arg(long)]
    steps: Option<u64>,

    /// Print per-cycle pipeline and micro-step occupancy.
    #[arg(long)]
    trace: bool,

    /// Emit the final session snapshot as JSON instead of the report.
    #[arg(long)]
    json: bool,
}

/// Coerces a raw operand string to an integer, defaulting to 0 for
/// non-numeric or empty input. Invalid input never reaches the engines.
fn parse_operand(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn print_program(label: &str, instructions: &[Instruction]) {
    println!("{label}:");
    for instr in instructions {
        println!(
            "  {:#06x}  {:<4} {:<18} ; {}",
            instr.address,
            instr.opcode,
            instr.operands.join(", "),
            instr.description
        );
    }
}

fn print_trace(sim: &Simulator) {
    let risc = sim.risc_state();
    let cisc = sim.cisc_state();

    let mut stages = String::new();
    for stage in &risc.pipeline {
        let occupant = stage
            .instruction
            .as_ref()
            .map_or("---", |i| i.opcode.as_str());
        stages.push_str(&format!("{}:{:<4} ", stage.name, occupant));
    }

    let cisc_part = if cisc.is_complete() {
        "done".to_string()
    } else {
        format!("inst={} micro={}", cisc.pc, cisc.current_micro_step)
    };

    println!(
        "cycle {:>3} | RISC {stages}| CISC {cisc_part}",
        risc.current_cycle
    );
}

/// Main entry point.
///
/// 1. **Configuration**: parses command-line arguments and loads the TOML
///    configuration file; CLI flags override file values, and a missing
///    file falls back to defaults.
/// 2. **Session**: builds the `Simulator` for the selected operation and
///    operands.
/// 3. **Execution**: manual ticks (`--steps`) or continuous mode with the
///    configured interval between ticks.
/// 4. **Report**: prints the comparison statistics, or the JSON snapshot
///    with `--json`.
fn main() {
    let args = Args::parse();

    let config: Config = match fs::read_to_string(&args.config) {
        Ok(content) => toml::from_str(&content).expect("Failed to parse config"),
        Err(_) => Config::default(),
    };

    let operation = args.operation.unwrap_or(config.program.operation);
    let operand_a = args
        .operand_a
        .as_deref()
        .map_or(config.program.operand_a, parse_operand);
    let operand_b = args
        .operand_b
        .as_deref()
        .map_or(config.program.operand_b, parse_operand);
    let speed = args
        .speed
        .unwrap_or(config.general.speed_ms)
        .clamp(SPEED_MIN_MS, SPEED_MAX_MS);
    let trace = args.trace || config.general.trace_steps;

    let mut sim = Simulator::new(operation, operand_a, operand_b);
    sim.set_speed(speed);

    if !args.json {
        println!("Simulation Configuration");
        println!("------------------------");
        println!("  Operation:  {operation}");
        println!("  Operand A:  {operand_a}");
        println!("  Operand B:  {operand_b}");
        println!("  Interval:   {speed} ms");
        println!("------------------------");
        print_program("RISC program", &sim.program().risc_instructions);
        print_program("CISC program", &sim.program().cisc_instructions);
        println!("------------------------");
    }

    if let Some(steps) = args.steps {
        for _ in 0..steps {
            sim.step();
            if trace {
                print_trace(&sim);
            }
        }
    } else {
        sim.run();
        while sim.poll() {
            if trace {
                print_trace(&sim);
            }
            if sim.is_running() {
                thread::sleep(Duration::from_millis(sim.speed_ms()));
            }
        }
    }

    if args.json {
        let snapshot =
            serde_json::to_string_pretty(&sim.snapshot()).expect("Failed to serialize snapshot");
        println!("{snapshot}");
    } else {
        stats::print_comparison(
            sim.program(),
            sim.risc_metrics(),
            sim.cisc_metrics(),
            sim.risc_result(),
            sim.cisc_result(),
        );
    }
}
