//! System Components.
//!
//! This module organizes what surrounds the CPU core: the flat memory it
//! executes from and the host environment it traps into.

/// Built-in host environments.
pub mod devices;

/// Flat memory and its backing buffer.
pub mod memory;

/// Environment trait definitions for ECALL/EBREAK handoff.
pub mod traits;

pub use devices::DetachedEnvironment;
pub use memory::{MemError, Memory};
pub use traits::{BreakDirective, EcallOutcome, Environment, TrapContext};
