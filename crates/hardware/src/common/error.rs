//! Fault and Load-Error Definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Faults:** Unrecoverable execution errors (bad register index, bad
//!    memory address, unknown opcode, unsupported ALU operation).
//! 2. **Load Errors:** Failures while reading or parsing a program file.
//!
//! The LS-8 has no exception or trap mechanism, so every `Fault` aborts
//! execution immediately; nothing is retried. Each variant carries the
//! offending address, opcode, or PC so a failing program can be diagnosed.

use std::io;

use thiserror::Error;

use crate::common::constants::{MEMORY_SIZE, NUM_REGISTERS};
use crate::core::units::alu::AluOp;

/// Unrecoverable execution fault.
///
/// Raised by the dispatch loop or an instruction handler; the run loop stops
/// at the first fault and the machine state is left as-is for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// A register operand named a register outside `[0, 8)`.
    #[error("register index {index} out of range (register file holds {})", NUM_REGISTERS)]
    RegisterOutOfRange {
        /// The offending register index.
        index: usize,
    },

    /// A computed address fell outside the `[0, 256)` address space.
    #[error("memory address {addr:#06x} out of range (memory holds {} bytes)", MEMORY_SIZE)]
    MemoryOutOfRange {
        /// The offending address.
        addr: usize,
    },

    /// The byte at PC is not present in the dispatch table.
    #[error("illegal instruction {opcode:#010b} at pc {pc:#04x}")]
    IllegalInstruction {
        /// The unrecognized opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: u8,
    },

    /// The ALU was invoked with an operation it does not implement.
    ///
    /// This is a programming-contract violation: the dispatch table only
    /// routes ADD and MUL to the ALU, so a correctly wired handler can never
    /// raise it.
    #[error("unsupported ALU operation {op:?}")]
    UnsupportedAluOp {
        /// The rejected operation.
        op: AluOp,
    },
}

/// Failure while reading or parsing an LS-8 program file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("cannot read program file '{path}': {source}")]
    Open {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line held text that is not a base-2 byte.
    #[error("line {line}: '{text}' is not a binary byte")]
    Parse {
        /// One-based line number within the file.
        line: usize,
        /// The offending token, after comment stripping and trimming.
        text: String,
    },

    /// The program holds more bytes than the machine has memory.
    #[error("program is {size} bytes but memory holds only {capacity}")]
    TooLarge {
        /// Number of instruction bytes in the program.
        size: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },
}
