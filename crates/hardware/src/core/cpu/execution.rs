//! Main Execution Loop.
//!
//! This module implements the fetch/decode/execute cycle of the control unit:
//! 1. **Fetch:** Reads the word at PC from the loaded program.
//! 2. **Decode:** Splits the word into fields and classifies the opcode.
//! 3. **Dispatch:** Resolves the next PC, checks that it lies inside the
//!    program, then routes the instruction to the ALU, memory, stack, or trap
//!    handler.
//! 4. **Run Loop:** Steps until the core leaves `Running` or an instruction
//!    limit is reached.
//!
//! An instruction either retires completely or faults without changing any
//! register, memory word, or the PC. A `Running` core always has its PC on a
//! word inside the loaded program.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::{JMPL_SIZE, WORD_SIZE};
use crate::core::arch::CpuState;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::{Opcode, UnknownOpcode, decode};
use crate::soc::traits::Environment;

impl Cpu {
    /// Executes one instruction.
    ///
    /// Does nothing if the core is not `Running`.
    ///
    /// # Arguments
    ///
    /// * `env` - Host environment servicing `ECALL` and `EBREAK`.
    ///
    /// # Returns
    ///
    /// The run-state after the instruction.
    pub fn step(&mut self, env: &mut dyn Environment) -> CpuState {
        if !self.state.is_running() {
            return self.state;
        }
        if let Err(fault) = self.execute(env) {
            self.enter_fault(fault);
        }
        self.state
    }

    /// Steps until the core halts or faults, or `max_instructions` steps have run.
    ///
    /// # Returns
    ///
    /// The number of instructions retired by this call and the final run-state.
    pub fn run(&mut self, env: &mut dyn Environment, max_instructions: Option<u64>) -> (u64, CpuState) {
        let start = self.stats.instructions_retired;
        let mut steps = 0u64;
        while self.state.is_running() && max_instructions.is_none_or(|max| steps < max) {
            let _ = self.step(env);
            steps += 1;
        }
        (self.stats.instructions_retired - start, self.state)
    }

    fn execute(&mut self, env: &mut dyn Environment) -> Result<(), Fault> {
        let pc = self.pc;
        let raw = self.fetch(pc)?;
        let d = decode(raw);
        let op = d
            .op()
            .map_err(|UnknownOpcode(opcode)| Fault::InvalidOpcode { pc, raw, opcode })?;

        if self.trace {
            tracing::trace!(
                "{:#010x}: {:#010x} {:<6} rd={} rs1={} rs2={} imm={}",
                pc,
                raw,
                op,
                d.rd,
                d.rs1,
                d.rs2,
                d.imm
            );
        }

        let next_pc = pc.wrapping_add(WORD_SIZE);
        let mut taken = false;

        // Resolve the successor first so that nothing commits if it lies
        // outside the program.
        let next = match op {
            Opcode::Li
            | Opcode::Add
            | Opcode::And
            | Opcode::Andi
            | Opcode::Or
            | Opcode::Ori
            | Opcode::Xor
            | Opcode::Xori
            | Opcode::Sub
            | Opcode::Shl
            | Opcode::Shr
            | Opcode::Push
            | Opcode::Pop
            | Opcode::Load
            | Opcode::Store => next_pc,

            Opcode::Jmp => Bru::jump_target(d.imm),
            Opcode::Jmpl => self.fetch_jmpl_target(pc)?,
            Opcode::Ret => self.regs.ra(),

            Opcode::Beq | Opcode::Bne | Opcode::Blt | Opcode::Bge => {
                taken = Bru::taken(op, self.regs.read(d.rs1), self.regs.read(d.rs2));
                if taken {
                    Bru::branch_target(pc, d.imm)
                } else {
                    next_pc
                }
            }

            Opcode::Ecall => {
                if !self.handle_ecall(pc, env) {
                    self.stats.record(op, false);
                    return Ok(());
                }
                next_pc
            }
            Opcode::Ebreak => {
                self.stats.record(op, false);
                self.handle_ebreak(pc, env);
                return Ok(());
            }
        };
        self.check_pc(next)?;

        match op {
            Opcode::Li
            | Opcode::Add
            | Opcode::And
            | Opcode::Andi
            | Opcode::Or
            | Opcode::Ori
            | Opcode::Xor
            | Opcode::Xori
            | Opcode::Sub
            | Opcode::Shl
            | Opcode::Shr => {
                let result = Alu::execute(op, self.regs.read(d.rs1), self.regs.read(d.rs2), d.imm);
                self.regs.write(d.rd, result);
            }

            Opcode::Jmpl => self.regs.set_ra(pc.wrapping_add(JMPL_SIZE)),

            Opcode::Push => {
                let val = self.regs.read(d.rs1);
                self.exec_push(val)?;
            }
            Opcode::Pop => self.exec_pop(d.rd)?,
            Opcode::Load => self.exec_load(d.rd, d.rs1, d.rs2, d.imm)?,
            Opcode::Store => self.exec_store(d.rs1, d.rs2, d.imm)?,

            Opcode::Jmp
            | Opcode::Ret
            | Opcode::Beq
            | Opcode::Bne
            | Opcode::Blt
            | Opcode::Bge
            | Opcode::Ecall
            | Opcode::Ebreak => {}
        }

        self.pc = next;
        self.stats.record(op, taken);
        Ok(())
    }
}
