//! Memory Access Handlers.
//!
//! This module implements every access the control unit makes to Memory:
//! 1. **Fetch:** Program-bounded, always-aligned instruction reads, including
//!    the address word of a `JMPL` pair.
//! 2. **Load/Store:** Data accesses at `rs1 + rs2 + imm`.
//! 3. **Stack:** `PUSH`/`POP` with stack-region checks against the configured
//!    top and limit.
//!
//! Every handler checks before it mutates, so a faulting instruction leaves
//! registers and Memory as they were.

use super::Cpu;
use crate::common::constants::WORD_SIZE;
use crate::common::{AccessType, Fault};
use crate::core::units::lsu::Lsu;

impl Cpu {
    /// Checks that `pc` names an instruction word inside the loaded program.
    ///
    /// # Returns
    ///
    /// `Misaligned` if `pc` is not a multiple of four, or `MemoryOutOfBounds`
    /// if `pc` lies outside the loaded program.
    pub(crate) fn check_pc(&self, pc: u32) -> Result<(), Fault> {
        if !pc.is_multiple_of(WORD_SIZE) {
            return Err(Fault::Misaligned {
                addr: pc,
                access: AccessType::Fetch,
            });
        }
        if pc >= self.program_end() {
            return Err(Fault::MemoryOutOfBounds {
                addr: pc,
                access: AccessType::Fetch,
            });
        }
        Ok(())
    }

    /// Fetches the instruction word at `pc`.
    ///
    /// # Returns
    ///
    /// The raw word, or `Misaligned` if `pc` is not a multiple of four, or
    /// `MemoryOutOfBounds` if `pc` lies outside the loaded program.
    pub fn fetch(&self, pc: u32) -> Result<u32, Fault> {
        self.check_pc(pc)?;
        self.mem
            .fetch_u32(pc)
            .map_err(|e| e.into_fault(AccessType::Fetch))
    }

    /// Reads the absolute target stored in the word after a `JMPL` at `pc`.
    pub(crate) fn fetch_jmpl_target(&self, pc: u32) -> Result<u32, Fault> {
        let target_addr = pc
            .checked_add(WORD_SIZE)
            .filter(|&addr| addr < self.program_end())
            .ok_or(Fault::TruncatedInstruction { pc })?;
        self.fetch(target_addr)
    }

    /// Executes `LOAD`: `rd = mem[rs1 + rs2 + imm]`.
    pub(crate) fn exec_load(&mut self, rd: usize, rs1: usize, rs2: usize, imm: i32) -> Result<(), Fault> {
        let addr = Lsu::effective_address(self.regs.read(rs1), self.regs.read(rs2), imm);
        let val = self
            .mem
            .read_u32(addr)
            .map_err(|e| e.into_fault(AccessType::Read))?;
        self.regs.write(rd, val);
        Ok(())
    }

    /// Executes `STORE`: `mem[rs1 + rs2 + imm] = rs2`. `rd` is not used.
    pub(crate) fn exec_store(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), Fault> {
        let val = self.regs.read(rs2);
        let addr = Lsu::effective_address(self.regs.read(rs1), val, imm);
        self.mem
            .write_u32(addr, val)
            .map_err(|e| e.into_fault(AccessType::Write))
    }

    /// Executes `PUSH`: `sp -= 4; mem[sp] = val`.
    ///
    /// `val` is read before `sp` moves, so `PUSH sp` stores the old stack pointer.
    pub(crate) fn exec_push(&mut self, val: u32) -> Result<(), Fault> {
        let sp = self.regs.sp();
        let new_sp = sp
            .checked_sub(WORD_SIZE)
            .filter(|&new_sp| new_sp >= self.stack_limit())
            .ok_or(Fault::StackOverflow { sp })?;
        self.mem
            .write_u32(new_sp, val)
            .map_err(|e| e.into_fault(AccessType::Write))?;
        self.regs.set_sp(new_sp);
        Ok(())
    }

    /// Executes `POP`: `rd = mem[sp]; sp += 4`.
    ///
    /// `sp` is advanced before `rd` is written, so `POP sp` leaves the popped value in `sp`.
    /// An `sp` below the stack limit points outside the stack and overflows.
    pub(crate) fn exec_pop(&mut self, rd: usize) -> Result<(), Fault> {
        let sp = self.regs.sp();
        if sp < self.stack_limit() {
            return Err(Fault::StackOverflow { sp });
        }
        let new_sp = sp
            .checked_add(WORD_SIZE)
            .filter(|&end| end <= self.stack_top())
            .ok_or(Fault::StackUnderflow { sp })?;
        let val = self
            .mem
            .read_u32(sp)
            .map_err(|e| e.into_fault(AccessType::Read))?;
        self.regs.set_sp(new_sp);
        self.regs.write(rd, val);
        Ok(())
    }
}
