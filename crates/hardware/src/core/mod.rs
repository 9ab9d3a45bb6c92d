//! CPU Core.
//!
//! This module contains everything that executes instructions:
//! 1. **Arch:** Architectural state (RAM, register file, flags).
//! 2. **CPU:** The `Cpu` container and the fetch-decode-execute loop.
//! 3. **Units:** The arithmetic/logic unit.

/// Architectural state (RAM, registers, flags).
pub mod arch;
/// CPU container, dispatch loop, and instruction handlers.
pub mod cpu;
/// Execution units (ALU).
pub mod units;

pub use cpu::Cpu;
