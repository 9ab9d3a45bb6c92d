//! Fetch-Decode-Execute Loop.
//!
//! This module implements the execution cycle of the CPU. It performs the
//! following:
//! 1. **Dispatch:** Reads the opcode at PC and routes it through a flat
//!    `match` (the dispatch table) to its handler.
//! 2. **Handlers:** One method per opcode; each reads its operand bytes
//!    directly from memory at `PC+1`/`PC+2` and is solely responsible for
//!    advancing or replacing the PC.
//! 3. **Observability:** Emits one `tracing` event per fetched instruction.
//!
//! No handler may leave the PC unchanged without transferring control;
//! every handler either advances past its operands or assigns a new PC.

use tracing::trace;

use super::Cpu;
use crate::common::error::Fault;
use crate::core::units::alu::{self, AluOp};
use crate::isa::{disasm, opcodes};

impl Cpu {
    /// Runs the fetch-decode-execute loop until HLT or a fault.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised by a step; the machine state is
    /// left untouched past the faulting instruction for diagnosis.
    pub fn run(&mut self) -> Result<(), Fault> {
        while !self.halted {
            self.step()?;
        }
        Ok(())
    }

    /// Executes a single instruction.
    ///
    /// Reads the opcode at PC, dispatches to its handler, and records the
    /// retired instruction. A HLT transitions the CPU to its terminal
    /// halted state.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::IllegalInstruction`] for an opcode absent from the
    /// dispatch table, or whatever fault the handler raises.
    pub fn step(&mut self) -> Result<(), Fault> {
        let opcode = self.ram.read(usize::from(self.pc))?;
        trace!(
            pc = self.pc,
            opcode,
            inst = disasm::mnemonic(opcode),
            "execute"
        );

        match opcode {
            opcodes::HLT => self.halted = true,
            opcodes::LDI => self.op_ldi()?,
            opcodes::PRN => self.op_prn()?,
            opcodes::PRA => self.op_pra()?,
            opcodes::ADD => self.op_add()?,
            opcodes::MUL => self.op_mul()?,
            opcodes::PUSH => self.op_push()?,
            opcodes::POP => self.op_pop()?,
            opcodes::CALL => self.op_call()?,
            opcodes::RET => self.op_ret()?,
            opcodes::CMP => self.op_cmp()?,
            opcodes::JMP => self.op_jmp()?,
            opcodes::JEQ => self.op_jeq()?,
            opcodes::JNE => self.op_jne()?,
            _ => {
                return Err(Fault::IllegalInstruction {
                    opcode,
                    pc: self.pc,
                });
            }
        }

        self.stats.record(opcode);
        Ok(())
    }

    /// Performs an ALU operation: reads both registers, computes, and
    /// writes the result back into `reg_a`.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::UnsupportedAluOp`] for operations outside
    /// `{ADD, MUL}`, or a register fault for a bad index.
    pub fn alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) -> Result<(), Fault> {
        let a = self.regs.read(reg_a)?;
        let b = self.regs.read(reg_b)?;
        let result = alu::execute(op, a, b)?;
        self.regs.write(reg_a, result)
    }

    /// Reads the operand byte at `PC + index`.
    fn operand(&self, index: u8) -> Result<u8, Fault> {
        self.ram.read(usize::from(self.pc.wrapping_add(index)))
    }

    /// `LDI reg, imm`: load an immediate into a register. PC += 3.
    fn op_ldi(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let imm = self.operand(2)?;
        self.regs.write(reg, imm)?;
        self.pc = self.pc.wrapping_add(3);
        Ok(())
    }

    /// `PRN reg`: print the decimal value of a register. PC += 2.
    fn op_prn(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let val = self.regs.read(reg)?;
        self.console.print_value(val);
        self.pc = self.pc.wrapping_add(2);
        Ok(())
    }

    /// `PRA reg`: print the character with the register's code point. PC += 2.
    fn op_pra(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let val = self.regs.read(reg)?;
        self.console.print_char(val);
        self.pc = self.pc.wrapping_add(2);
        Ok(())
    }

    /// `ADD regA, regB`: wrapping sum into `regA`. PC += 3.
    fn op_add(&mut self) -> Result<(), Fault> {
        let reg_a = usize::from(self.operand(1)?);
        let reg_b = usize::from(self.operand(2)?);
        self.alu(AluOp::Add, reg_a, reg_b)?;
        self.pc = self.pc.wrapping_add(3);
        Ok(())
    }

    /// `MUL regA, regB`: wrapping product into `regA`. PC += 3.
    fn op_mul(&mut self) -> Result<(), Fault> {
        let reg_a = usize::from(self.operand(1)?);
        let reg_b = usize::from(self.operand(2)?);
        self.alu(AluOp::Mul, reg_a, reg_b)?;
        self.pc = self.pc.wrapping_add(3);
        Ok(())
    }

    /// `PUSH reg`: push the register's value onto the stack. PC += 2.
    fn op_push(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let val = self.regs.read(reg)?;
        self.push_byte(val)?;
        self.pc = self.pc.wrapping_add(2);
        Ok(())
    }

    /// `POP reg`: pop the top of the stack into the register. PC += 2.
    fn op_pop(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let val = self.pop_byte()?;
        self.regs.write(reg, val)?;
        self.pc = self.pc.wrapping_add(2);
        Ok(())
    }

    /// `CALL reg`: push the return address (`PC + 2`), then jump to the
    /// address held in the register.
    fn op_call(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let target = self.regs.read(reg)?;
        self.push_byte(self.pc.wrapping_add(2))?;
        self.pc = target;
        Ok(())
    }

    /// `RET`: pop the return address off the stack into the PC.
    fn op_ret(&mut self) -> Result<(), Fault> {
        self.pc = self.pop_byte()?;
        Ok(())
    }

    /// `CMP regA, regB`: compare and set exactly one FL bit. PC += 3.
    fn op_cmp(&mut self) -> Result<(), Fault> {
        let a = self.regs.read(usize::from(self.operand(1)?))?;
        let b = self.regs.read(usize::from(self.operand(2)?))?;
        self.flags.set_compare(a, b);
        self.pc = self.pc.wrapping_add(3);
        Ok(())
    }

    /// `JMP reg`: jump to the address held in the register.
    fn op_jmp(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        self.pc = self.regs.read(reg)?;
        Ok(())
    }

    /// `JEQ reg`: jump if the Equal flag is set, else PC += 2.
    fn op_jeq(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let target = self.regs.read(reg)?;
        if self.flags.equal() {
            self.stats.branches_taken += 1;
            self.pc = target;
        } else {
            self.stats.branches_not_taken += 1;
            self.pc = self.pc.wrapping_add(2);
        }
        Ok(())
    }

    /// `JNE reg`: jump if the Equal flag is clear, else PC += 2.
    fn op_jne(&mut self) -> Result<(), Fault> {
        let reg = usize::from(self.operand(1)?);
        let target = self.regs.read(reg)?;
        if self.flags.equal() {
            self.stats.branches_not_taken += 1;
            self.pc = self.pc.wrapping_add(2);
        } else {
            self.stats.branches_taken += 1;
            self.pc = target;
        }
        Ok(())
    }
}
