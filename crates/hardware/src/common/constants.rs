//! Global Machine Constants.
//!
//! This module defines the architectural constants of the LS-8. It includes:
//! 1. **Memory Constants:** Address-space size and the stack start address.
//! 2. **Register Constants:** Register-file size and reserved register indices.
//! 3. **Flag Constants:** Bit positions within the FL register.
//! 4. **Instruction Constants:** Masks and shifts for opcode bit fields.

/// Size of the LS-8 address space in bytes.
///
/// Addresses are a single byte wide, so every address in `[0, 256)` is valid
/// and the program, data, and stack all share this space.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Index of the register reserved as the stack pointer.
///
/// This is a software convention, not a hardware protection: ordinary
/// instructions may still overwrite `R7`.
pub const SP: usize = 7;

/// Initial stack pointer value (top of the stack region).
///
/// The stack grows downward from this address; the bytes above it are
/// reserved by the LS-8 memory map.
pub const STACK_START: u8 = 0xF4;

/// FL bit set when CMP found its operands equal.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// FL bit set when CMP found register A greater than register B.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// FL bit set when CMP found register A less than register B.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Bit mask for the operand-count field of an opcode (bits 7-6).
pub const OPERANDS_MASK: u8 = 0b1100_0000;

/// Bit position shift for the operand-count field.
pub const OPERANDS_SHIFT: u8 = 6;

/// Bit mask for the ALU-class flag of an opcode (bit 5).
pub const ALU_MASK: u8 = 0b0010_0000;

/// Bit mask for the sets-PC flag of an opcode (bit 4).
///
/// Instructions with this bit set (CALL, RET, JMP, JEQ, JNE) replace the
/// program counter instead of advancing it past their operands.
pub const SETS_PC_MASK: u8 = 0b0001_0000;

/// Radix of the program file format (one base-2 byte per line).
pub const PROGRAM_RADIX: u32 = 2;
