//! Host environment trait for ECALL and EBREAK.
//!
//! This module defines the `Environment` trait implemented by hosts that embed
//! the core. It provides:
//! 1. **Context:** `TrapContext`, the registers and memory lent to the host.
//! 2. **ECALL:** A synchronous service call with a host-defined convention.
//! 3. **EBREAK:** A debugger handoff that ends in a continue or terminate directive.
//!
//! Both entry points block the core: execution does not proceed until the host
//! returns. The calling convention (which registers hold the call number,
//! arguments and results) is entirely up to the implementor.

use crate::common::RegisterFile;
use crate::soc::memory::Memory;

/// Machine state lent to the host for the duration of a trap.
#[derive(Debug)]
pub struct TrapContext<'a> {
    /// Address of the ECALL or EBREAK instruction.
    pub pc: u32,
    /// Register file; host writes become visible when the core resumes.
    pub regs: &'a mut RegisterFile,
    /// Memory; host writes become visible when the core resumes.
    pub mem: &'a mut Memory,
}

/// What the core does after an ECALL returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EcallOutcome {
    /// Resume at the instruction after the ECALL.
    Resume,
    /// Stop the program with the given exit code; the core halts.
    Exit(u32),
}

/// Directive returned by the host at the end of an EBREAK handoff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakDirective {
    /// Resume at the instruction after the EBREAK.
    Continue,
    /// Resume at the given address.
    ContinueAt(u32),
    /// Leave the core halted at the EBREAK.
    Terminate,
}

/// Host side of the environment bridge.
pub trait Environment {
    /// Services an environment call.
    fn ecall(&mut self, ctx: TrapContext<'_>) -> EcallOutcome;

    /// Hands control to the host debugger after an EBREAK froze the core.
    fn ebreak(&mut self, ctx: TrapContext<'_>) -> BreakDirective;
}
