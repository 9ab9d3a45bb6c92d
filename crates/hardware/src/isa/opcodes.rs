//! LS-8 Opcodes.
//!
//! Defines the opcode byte for each implemented instruction. The encoding is
//! structural: bits 7-6 give the operand count, bit 5 marks ALU-class
//! instructions, and bit 4 marks instructions that set the PC directly (see
//! [`crate::isa::instruction::OpcodeBits`]).

/// Halt the CPU (and exit the emulator).
pub const HLT: u8 = 0b0000_0001;

/// Load an immediate value into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print the decimal value of a register.
pub const PRN: u8 = 0b0100_0111;

/// Print the character whose code point is the value of a register.
pub const PRA: u8 = 0b0100_1000;

/// Add two registers, storing the result in the first.
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers, storing the result in the first.
pub const MUL: u8 = 0b1010_0010;

/// Push a register value onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call a subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Return from a subroutine.
pub const RET: u8 = 0b0001_0001;

/// Compare two registers and set the FL flags.
pub const CMP: u8 = 0b1010_0111;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;
