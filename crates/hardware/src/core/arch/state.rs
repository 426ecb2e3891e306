//! CPU Run-State.
//!
//! This module defines the run-state machine of the control unit:
//! 1. **Running:** Instructions are fetched and executed.
//! 2. **Halted:** Execution is suspended by `EBREAK` or a host exit request.
//! 3. **Faulted:** Execution stopped on an architectural fault.
//!
//! Transitions only leave `Running`. `Halted` is left through an explicit host
//! resume, `Faulted` only through a reset.

use std::fmt;

use crate::common::Fault;

/// Run-state of a CPU instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CpuState {
    /// The core fetches and executes instructions.
    #[default]
    Running,

    /// Execution is suspended; the PC is frozen at the instruction that halted it.
    Halted,

    /// Execution stopped on the associated fault.
    Faulted(Fault),
}

impl CpuState {
    /// Returns `true` while the core is executing.
    #[inline]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Returns the fault if the core is in the faulted state.
    pub const fn fault(&self) -> Option<Fault> {
        match self {
            Self::Faulted(fault) => Some(*fault),
            _ => None,
        }
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "Running"),
            Self::Halted => write!(f, "Halted"),
            Self::Faulted(fault) => write!(f, "Faulted({})", fault.name()),
        }
    }
}
