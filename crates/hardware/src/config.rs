//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize
//! the emulator. It provides:
//! 1. **Defaults:** Baseline machine constants (stack placement, tracing).
//! 2. **Structures:** Hierarchical config for general behavior and machine
//!    geometry.
//!
//! Configuration is supplied as JSON via the CLI's `--config` flag, or use
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the emulator.
///
/// These values define the baseline behavior when not explicitly
/// overridden in a configuration file.
mod defaults {
    /// Instruction tracing disabled by default.
    pub const TRACE_INSTRUCTIONS: bool = false;

    /// Statistics report disabled by default.
    pub const PRINT_STATS: bool = false;

    /// Initial stack pointer value: top of the LS-8 stack region.
    pub const STACK_START: u8 = crate::common::constants::STACK_START;
}

/// Root configuration for an emulator run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior (tracing, statistics).
    pub general: GeneralConfig,
    /// Machine geometry (stack placement).
    pub machine: MachineConfig,
}

/// General emulator behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace event per executed instruction.
    pub trace_instructions: bool,
    /// Print the statistics report when the run ends.
    pub print_stats: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
            print_stats: defaults::PRINT_STATS,
        }
    }
}

/// Machine geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Initial value of the stack pointer (`R7`).
    ///
    /// The stack grows downward from this address.
    pub stack_start: u8,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            stack_start: defaults::STACK_START,
        }
    }
}
