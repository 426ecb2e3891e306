//! R-machine architectural state components.
//!
//! This module contains the architectural elements owned by the CPU:
//! 1. **GPRs:** The 16-entry general-purpose register storage.
//! 2. **State:** The Running / Halted / Faulted run-state machine.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Run-state of the control unit.
pub mod state;

pub use self::state::CpuState;
