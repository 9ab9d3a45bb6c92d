//! LS-8 microcomputer emulator library.
//!
//! This crate implements an instruction-level emulator for the LS-8, an 8-bit
//! educational architecture, with the following:
//! 1. **Core:** CPU state (256-byte RAM, eight registers, PC, flags) and the
//!    fetch-decode-execute loop.
//! 2. **ISA:** Opcode constants, opcode bit-field extraction, and disassembly.
//! 3. **Units:** The arithmetic/logic unit (ADD, MUL).
//! 4. **SoC:** The console output device (PRN/PRA).
//! 5. **Simulation:** Program loader, configuration, and statistics collection.

/// Common types and constants (memory geometry, flag bits, fault taxonomy).
pub mod common;
/// Emulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, dispatch, instruction handlers, ALU).
pub mod core;
/// Instruction set (opcodes, opcode bit fields, disassembly).
pub mod isa;
/// Program loader.
pub mod sim;
/// Output devices (console).
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers, flags, and stats.
pub use crate::core::Cpu;
/// Console output device; construct with `Console::stdout` or a custom sink.
pub use crate::soc::Console;
