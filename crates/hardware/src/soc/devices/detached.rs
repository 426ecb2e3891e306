//! Environment for hosts with no services attached.
//!
//! ECALL is accepted and does nothing; EBREAK terminates the run. Useful for
//! running bare programs that signal completion with a breakpoint.

use crate::soc::traits::{BreakDirective, EcallOutcome, Environment, TrapContext};

/// An environment that services nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedEnvironment;

impl Environment for DetachedEnvironment {
    fn ecall(&mut self, ctx: TrapContext<'_>) -> EcallOutcome {
        tracing::debug!(pc = ctx.pc, "ecall ignored by detached environment");
        EcallOutcome::Resume
    }

    fn ebreak(&mut self, ctx: TrapContext<'_>) -> BreakDirective {
        tracing::debug!(pc = ctx.pc, "ebreak terminates detached environment");
        BreakDirective::Terminate
    }
}
