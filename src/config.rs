use serde::Deserialize;

use crate::isa::Operation;

const DEFAULT_SPEED_MS: u64 = 500;
const DEFAULT_OPERAND_A: i64 = 10;
const DEFAULT_OPERAND_B: i64 = 5;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub program: ProgramConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_steps: bool,

    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_steps: false,
            speed_ms: DEFAULT_SPEED_MS,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProgramConfig {
    #[serde(default = "default_operation")]
    pub operation: Operation,

    #[serde(default = "default_operand_a")]
    pub operand_a: i64,

    #[serde(default = "default_operand_b")]
    pub operand_b: i64,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            operation: default_operation(),
            operand_a: DEFAULT_OPERAND_A,
            operand_b: DEFAULT_OPERAND_B,
        }
    }
}

fn default_speed_ms() -> u64 {
    DEFAULT_SPEED_MS
}

fn default_operation() -> Operation {
    Operation::Addition
}

fn default_operand_a() -> i64 {
    DEFAULT_OPERAND_A
}

fn default_operand_b() -> i64 {
    DEFAULT_OPERAND_B
}
