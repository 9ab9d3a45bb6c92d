//! # Fault Formatting Tests
//!
//! Every fault must carry enough context (address, opcode, PC) to
//! diagnose the failing program from its message alone.

use ls8_core::common::{Fault, LoadError};
use ls8_core::core::units::alu::AluOp;

#[test]
fn test_register_fault_names_the_index() {
    let msg = Fault::RegisterOutOfRange { index: 12 }.to_string();
    assert!(msg.contains("12"), "message should name the index: {msg}");
}

#[test]
fn test_memory_fault_names_the_address() {
    let msg = Fault::MemoryOutOfRange { addr: 0x1ff }.to_string();
    assert!(msg.contains("0x01ff"), "message should name the address: {msg}");
}

#[test]
fn test_illegal_instruction_names_opcode_and_pc() {
    let msg = Fault::IllegalInstruction {
        opcode: 0b1111_1111,
        pc: 0x10,
    }
    .to_string();
    assert!(msg.contains("0b11111111"), "message should name the opcode: {msg}");
    assert!(msg.contains("0x10"), "message should name the pc: {msg}");
}

#[test]
fn test_unsupported_alu_op_names_the_op() {
    let msg = Fault::UnsupportedAluOp { op: AluOp::Xor }.to_string();
    assert!(msg.contains("Xor"), "message should name the op: {msg}");
}

#[test]
fn test_parse_error_names_line_and_token() {
    let msg = LoadError::Parse {
        line: 7,
        text: "10021000".to_string(),
    }
    .to_string();
    assert!(msg.contains("7"), "message should name the line: {msg}");
    assert!(msg.contains("10021000"), "message should name the token: {msg}");
}
