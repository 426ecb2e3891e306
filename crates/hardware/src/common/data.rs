//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Generation:** Telling apart fetch, load and store faults in a `Fault`.
//! 2. **Logging:** Tagging out-of-bounds and misaligned accesses in trace output.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a memory access faults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access, including the address word of a JMPL.
    Fetch,

    /// Data read access (LOAD and POP).
    Read,

    /// Data write access (STORE and PUSH).
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch => write!(f, "fetch"),
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}
