//! CPU Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Memory, register file, program counter, flags.
//! 2. **Stack Discipline:** The shared push/pop primitives used by PUSH,
//!    POP, CALL, and RET alike.
//! 3. **Observability:** State dump for fault diagnosis.
//!
//! Exactly one `Cpu` exists per run; it owns all memory and registers
//! exclusively for its entire lifetime (no interior sharing, no locking).

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

use crate::common::constants::SP;
use crate::common::error::Fault;
use crate::config::Config;
use crate::core::arch::{Flags, Gpr, Ram};
use crate::isa::disasm;
use crate::soc::Console;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// The CPU fetches one opcode per step, dispatches to the matching handler,
/// and stops at HLT or at the first fault.
#[derive(Debug)]
pub struct Cpu {
    /// Byte-addressable memory (program, data, and stack).
    pub ram: Ram,
    /// General-purpose registers `R0`-`R7`.
    pub regs: Gpr,
    /// Program counter; always the address of the next opcode to fetch.
    ///
    /// The LS-8 address space is one byte wide, so PC arithmetic wraps
    /// modulo 256.
    pub pc: u8,
    /// FL comparison flags, set by CMP and read by JEQ/JNE.
    pub flags: Flags,
    /// True once HLT has executed; terminal.
    pub halted: bool,

    /// Console output device (PRN/PRA).
    pub console: Console,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU with zeroed state and the stack pointer placed at
    /// the configured top of the stack region.
    ///
    /// # Arguments
    ///
    /// * `console` - The output device PRN/PRA write to.
    /// * `config`  - Emulator configuration.
    pub fn new(console: Console, config: &Config) -> Self {
        let mut regs = Gpr::new();
        // Gpr::write only faults on a bad index; SP is a valid one.
        let _ = regs.write(SP, config.machine.stack_start);

        Self {
            ram: Ram::new(),
            regs,
            pc: 0,
            flags: Flags::new(),
            halted: false,
            console,
            stats: SimStats::default(),
        }
    }

    /// Pushes `val` onto the stack: decrement SP, then store at the new SP.
    ///
    /// This is the single stack primitive; PUSH and CALL both go through it,
    /// so explicit stack manipulation and subroutine linkage interoperate.
    ///
    /// # Errors
    ///
    /// Propagates any register or memory fault.
    pub fn push_byte(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self.regs.read(SP)?.wrapping_sub(1);
        self.regs.write(SP, sp)?;
        self.ram.write(usize::from(sp), val)
    }

    /// Pops the byte at SP off the stack: load from SP, then increment SP.
    ///
    /// The single counterpart of [`Cpu::push_byte`]; POP and RET both go
    /// through it.
    ///
    /// # Errors
    ///
    /// Propagates any register or memory fault.
    pub fn pop_byte(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.read(SP)?;
        let val = self.ram.read(usize::from(sp))?;
        self.regs.write(SP, sp.wrapping_add(1))?;
        Ok(val)
    }

    /// Dumps the CPU state to stderr for fault diagnosis.
    ///
    /// Prints the PC, the FL byte, the three bytes at the PC (the opcode
    /// and its potential operands), and all eight registers.
    pub fn dump_state(&self) {
        let at = |off: u8| {
            self.ram
                .read(usize::from(self.pc.wrapping_add(off)))
                .unwrap_or(0)
        };
        eprintln!(
            "pc={:#04x} fl={:#010b} | {:02x} {:02x} {:02x} ({})",
            self.pc,
            self.flags.bits(),
            at(0),
            at(1),
            at(2),
            disasm::mnemonic(at(0)),
        );
        self.regs.dump();
    }
}
