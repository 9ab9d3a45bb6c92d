//! LS-8 Disassembly.
//!
//! Maps opcode bytes back to their mnemonics. Used by the instruction
//! tracer and the CPU state dump; not part of the execution contract.

use crate::isa::opcodes;

/// Returns the mnemonic for an opcode, or `"???"` if it is not part of the
/// instruction set.
pub fn mnemonic(opcode: u8) -> &'static str {
    match opcode {
        opcodes::HLT => "HLT",
        opcodes::LDI => "LDI",
        opcodes::PRN => "PRN",
        opcodes::PRA => "PRA",
        opcodes::ADD => "ADD",
        opcodes::MUL => "MUL",
        opcodes::PUSH => "PUSH",
        opcodes::POP => "POP",
        opcodes::CALL => "CALL",
        opcodes::RET => "RET",
        opcodes::CMP => "CMP",
        opcodes::JMP => "JMP",
        opcodes::JEQ => "JEQ",
        opcodes::JNE => "JNE",
        _ => "???",
    }
}
