//! LS-8 General-Purpose Register File.
//!
//! This module implements the register file of the LS-8. It performs the
//! following:
//! 1. **Storage:** Maintains eight unsigned 8-bit registers (`R0`-`R7`).
//! 2. **Bounds Enforcement:** Rejects any index outside `[0, 8)`.
//! 3. **Debugging:** Provides a one-line dump of the register state.
//!
//! `R7` is reserved by convention as the stack pointer, but nothing here
//! enforces that: the reservation is caller discipline, and ordinary
//! instructions can overwrite it.

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::Fault;

/// General-purpose register file.
///
/// Register values are `u8`; arithmetic performed on them wraps modulo 256
/// at the call sites, so a stored value is always already in range.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [u8; NUM_REGISTERS],
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads the register at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfRange`] if `idx` is outside `[0, 8)`.
    #[inline]
    pub fn read(&self, idx: usize) -> Result<u8, Fault> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(Fault::RegisterOutOfRange { index: idx })
    }

    /// Writes `val` to the register at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::RegisterOutOfRange`] if `idx` is outside `[0, 8)`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        match self.regs.get_mut(idx) {
            Some(reg) => {
                *reg = val;
                Ok(())
            }
            None => Err(Fault::RegisterOutOfRange { index: idx }),
        }
    }

    /// Dumps all eight registers to stderr on a single line.
    pub fn dump(&self) {
        let regs: Vec<String> = self
            .regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("r{i}={v:#04x}"))
            .collect();
        eprintln!("{}", regs.join(" "));
    }
}
