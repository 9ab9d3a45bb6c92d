//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the emulator. It provides:
//! 1. **Totals:** Retired instructions and host execution time.
//! 2. **Instruction mix:** Counts by category (move, ALU, stack, control,
//!    output).
//! 3. **Branches:** Taken vs. not-taken counts for the conditional jumps.

use std::time::Instant;

use crate::isa::instruction::OpcodeBits;
use crate::isa::opcodes;

/// Execution statistics for one emulator run.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed (HLT included).
    pub instructions_retired: u64,

    /// Count of data-movement instructions retired (LDI).
    pub inst_move: u64,
    /// Count of ALU-class instructions retired (ADD, MUL, CMP).
    pub inst_alu: u64,
    /// Count of stack instructions retired (PUSH, POP).
    pub inst_stack: u64,
    /// Count of control-transfer instructions retired (CALL, RET, JMP,
    /// JEQ, JNE).
    pub inst_control: u64,
    /// Count of output instructions retired (PRN, PRA).
    pub inst_output: u64,

    /// Number of conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Number of conditional jumps that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_move: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_output: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction under its category.
    ///
    /// The ALU and control classes come straight from the opcode's
    /// structural bits; the remaining classes are per-opcode.
    pub fn record(&mut self, opcode: u8) {
        self.instructions_retired += 1;
        if opcode.is_alu() {
            self.inst_alu += 1;
        } else if opcode.sets_pc() {
            self.inst_control += 1;
        } else {
            match opcode {
                opcodes::LDI => self.inst_move += 1,
                opcodes::PUSH | opcodes::POP => self.inst_stack += 1,
                opcodes::PRN | opcodes::PRA => self.inst_output += 1,
                _ => {}
            }
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;
        let mips = (self.instructions_retired as f64 / seconds) / 1_000_000.0;

        println!("\n==========================================================");
        println!("LS-8 SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.move                {} ({:.2}%)",
            self.inst_move,
            pct(self.inst_move)
        );
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            pct(self.inst_alu)
        );
        println!(
            "  op.stack               {} ({:.2}%)",
            self.inst_stack,
            pct(self.inst_stack)
        );
        println!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            pct(self.inst_control)
        );
        println!(
            "  op.output              {} ({:.2}%)",
            self.inst_output,
            pct(self.inst_output)
        );
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        println!("  taken                  {}", self.branches_taken);
        println!("  not_taken              {}", self.branches_not_taken);
        println!("==========================================================");
    }
}
