//! Trap Handling Logic.
//!
//! This module implements the transitions that leave the `Running` state:
//! 1. **ECALL:** Lends registers and Memory to the host and applies its outcome.
//! 2. **EBREAK:** Freezes the core, hands control to the host debugger, and
//!    applies the returned directive.
//! 3. **Faults:** Records the terminal `Faulted` state.

use super::Cpu;
use crate::common::Fault;
use crate::core::arch::CpuState;
use crate::soc::traits::{BreakDirective, EcallOutcome, Environment, TrapContext};

impl Cpu {
    /// Lends the machine state to the host for the duration of a trap.
    fn trap_context(&mut self, pc: u32) -> TrapContext<'_> {
        TrapContext {
            pc,
            regs: &mut self.regs,
            mem: &mut self.mem,
        }
    }

    /// Services an `ECALL` at `pc`.
    ///
    /// # Returns
    ///
    /// `true` if execution continues at the next instruction, `false` if the
    /// host requested an exit and the core halted at the ECALL.
    pub(crate) fn handle_ecall(&mut self, pc: u32, env: &mut dyn Environment) -> bool {
        tracing::debug!(pc, "ecall");
        match env.ecall(self.trap_context(pc)) {
            EcallOutcome::Resume => true,
            EcallOutcome::Exit(code) => {
                tracing::debug!(pc, code, "exit requested by environment");
                self.exit_code = Some(code);
                self.state = CpuState::Halted;
                false
            }
        }
    }

    /// Halts on an `EBREAK` at `pc` and applies the host's directive.
    ///
    /// The PC stays at the EBREAK until the host decides. `Terminate` leaves
    /// the core `Halted`; the host may still call [`Cpu::resume`] later. A
    /// resume target outside the program faults the core at the EBREAK.
    pub(crate) fn handle_ebreak(&mut self, pc: u32, env: &mut dyn Environment) {
        self.pc = pc;
        self.state = CpuState::Halted;
        tracing::debug!(pc, "ebreak: core halted, handing off to host");

        let directive = env.ebreak(self.trap_context(pc));
        tracing::debug!(pc, ?directive, "ebreak directive");
        match directive {
            BreakDirective::Continue => self.resume(),
            BreakDirective::ContinueAt(target) => self.resume_at(target),
            BreakDirective::Terminate => {}
        }
    }

    /// Enters the terminal `Faulted` state.
    pub(crate) fn enter_fault(&mut self, fault: Fault) {
        tracing::warn!(pc = self.pc, %fault, "core faulted");
        self.state = CpuState::Faulted(fault);
    }
}
