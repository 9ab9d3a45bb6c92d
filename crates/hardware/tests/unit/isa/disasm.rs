//! # Disassembly Tests

use ls8_core::isa::{disasm, opcodes};

#[test]
fn test_known_opcodes_have_mnemonics() {
    assert_eq!(disasm::mnemonic(opcodes::HLT), "HLT");
    assert_eq!(disasm::mnemonic(opcodes::LDI), "LDI");
    assert_eq!(disasm::mnemonic(opcodes::MUL), "MUL");
    assert_eq!(disasm::mnemonic(opcodes::CALL), "CALL");
    assert_eq!(disasm::mnemonic(opcodes::JNE), "JNE");
}

#[test]
fn test_unknown_opcode_renders_as_placeholder() {
    assert_eq!(disasm::mnemonic(0xFF), "???");
    assert_eq!(disasm::mnemonic(0x00), "???");
}
