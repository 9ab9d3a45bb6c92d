//! LS-8 Instruction Set.
//!
//! This module defines the instruction set surface of the emulator:
//! 1. **Opcodes:** One constant per LS-8 instruction.
//! 2. **Bit Fields:** Extraction of the structural fields every opcode encodes.
//! 3. **Disassembly:** Opcode-to-mnemonic mapping for traces and dumps.

/// Opcode-to-mnemonic mapping.
pub mod disasm;
/// Opcode bit-field extraction.
pub mod instruction;
/// Opcode constants.
pub mod opcodes;
