//! LS-8 Memory.
//!
//! This module implements the byte-addressable memory of the LS-8. It
//! performs the following:
//! 1. **Storage:** Maintains 256 unsigned 8-bit cells.
//! 2. **Bounds Enforcement:** Rejects any access outside `[0, 256)`.
//! 3. **Debugging:** Provides a hex dump of the full address space.
//!
//! Memory addresses and register numbers are distinct address spaces; this
//! array never backs a register access.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::Fault;

/// Byte-addressable memory.
///
/// Holds the loaded program and serves as the stack backing store. Owned
/// exclusively by one [`crate::core::Cpu`] for its entire lifetime.
#[derive(Debug, Clone)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates a new memory with every cell initialized to zero.
    pub fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfRange`] if `addr` is outside `[0, 256)`.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(Fault::MemoryOutOfRange { addr })
    }

    /// Writes `val` to the cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfRange`] if `addr` is outside `[0, 256)`.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = val;
                Ok(())
            }
            None => Err(Fault::MemoryOutOfRange { addr }),
        }
    }

    /// Copies `program` into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::MemoryOutOfRange`] if the program does not fit; no
    /// cells are written in that case.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Fault> {
        let end = program.len();
        match self.cells.get_mut(..end) {
            Some(dst) => {
                dst.copy_from_slice(program);
                Ok(())
            }
            None => Err(Fault::MemoryOutOfRange { addr: end - 1 }),
        }
    }

    /// Dumps the full address space to stderr, sixteen bytes per row.
    pub fn dump(&self) {
        for (row, chunk) in self.cells.chunks(16).enumerate() {
            let bytes: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            eprintln!("{:#04x}: {}", row * 16, bytes.join(" "));
        }
    }
}
