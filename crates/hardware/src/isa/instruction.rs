//! Opcode bit-field extraction.
//!
//! Provides bit extraction for the structural fields the LS-8 encodes in
//! every opcode byte: `AABCDDDD`, where `AA` is the operand count, `B`
//! marks an ALU-class instruction, `C` marks an instruction that sets the
//! PC directly, and `DDDD` is the instruction identifier.

use crate::common::constants::{ALU_MASK, OPERANDS_MASK, OPERANDS_SHIFT, SETS_PC_MASK};

/// Trait for extracting structural fields from an opcode byte.
///
/// The fields describe the instruction's shape, not its behavior: the
/// dispatch loop still decides what each opcode does, but the tracer and
/// the statistics classifier read these bits instead of keeping their own
/// per-opcode tables.
pub trait OpcodeBits {
    /// Extracts the operand count (bits 7-6).
    ///
    /// Every LS-8 instruction takes 0, 1, or 2 operand bytes, fixed per
    /// opcode; an instruction occupies `1 + operand_count()` memory cells.
    fn operand_count(&self) -> u8;

    /// Returns true if this is an ALU-class instruction (bit 5).
    fn is_alu(&self) -> bool;

    /// Returns true if this instruction sets the PC directly (bit 4).
    ///
    /// Such instructions (CALL, RET, JMP, JEQ, JNE) replace the PC instead
    /// of advancing it past their operands.
    fn sets_pc(&self) -> bool;
}

impl OpcodeBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self & OPERANDS_MASK) >> OPERANDS_SHIFT
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_MASK != 0
    }
}
