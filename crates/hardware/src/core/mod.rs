//! Core processor implementation.
//!
//! This module contains the execution core: the architectural state, the
//! functional units, and the control unit that sequences them.

/// Architectural state (general-purpose registers, run-state).
pub mod arch;

/// Control unit: fetch/decode/execute, stack and trap handling.
pub mod cpu;

/// Functional units (ALU, branch resolution, load/store addressing).
pub mod units;

pub use self::cpu::Cpu;
