//! Architectural Fault definitions.
//!
//! This module defines the error taxonomy of the execution core. It provides:
//! 1. **Fault Representation:** Every condition that terminates the run loop.
//! 2. **Error Handling:** Integration with `std::error::Error` through `thiserror`.
//!
//! A fault is never retried by the core. It is stored in the CPU state as
//! `CpuState::Faulted` and the host decides whether to reset, reload, or stop.

use thiserror::Error;

use super::data::AccessType;

/// R-machine fault types.
///
/// Faults are surfaced as a terminal state, never as a panic across component
/// boundaries. `EBREAK` is not a fault; it is a cooperative suspension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Opcode `00000` or one of the unassigned values `11001`-`11111`.
    ///
    /// The associated values are the PC of the offending word and the word itself.
    #[error("invalid opcode {opcode:#07b} in word {raw:#010x} at pc {pc:#x}")]
    InvalidOpcode {
        /// Address of the instruction word.
        pc: u32,
        /// Raw instruction word.
        raw: u32,
        /// Extracted 5-bit opcode field.
        opcode: u32,
    },

    /// A fetch, load, store, push, or pop addressed bytes outside Memory
    /// (or, for fetches, outside the loaded program).
    #[error("{access} out of bounds at {addr:#x}")]
    MemoryOutOfBounds {
        /// Faulting byte address.
        addr: u32,
        /// Kind of access that faulted.
        access: AccessType,
    },

    /// A word access at an address that is not a multiple of four.
    #[error("misaligned {access} at {addr:#x}")]
    Misaligned {
        /// Faulting byte address.
        addr: u32,
        /// Kind of access that faulted.
        access: AccessType,
    },

    /// `POP` with `sp` at or above the initial stack top.
    #[error("stack underflow: pop with sp {sp:#x} at or above stack top")]
    StackUnderflow {
        /// Value of `sp` when the pop was attempted.
        sp: u32,
    },

    /// `PUSH` that would move `sp` below the stack limit.
    #[error("stack overflow: push with sp {sp:#x} would cross the stack limit")]
    StackOverflow {
        /// Value of `sp` when the push was attempted.
        sp: u32,
    },

    /// `JMPL` placed as the final program word, with no address word after it.
    #[error("truncated JMPL at pc {pc:#x}: no address word follows")]
    TruncatedInstruction {
        /// Address of the JMPL word.
        pc: u32,
    },
}

impl Fault {
    /// Short name of the fault kind, used in logs and statistics.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidOpcode { .. } => "InvalidOpcode",
            Self::MemoryOutOfBounds { .. } => "MemoryOutOfBounds",
            Self::Misaligned { .. } => "Misaligned",
            Self::StackUnderflow { .. } => "StackUnderflow",
            Self::StackOverflow { .. } => "StackOverflow",
            Self::TruncatedInstruction { .. } => "TruncatedInstruction",
        }
    }
}
