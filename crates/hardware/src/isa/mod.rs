//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, register conventions, field extraction, and the
//! decoder for the R-machine's single fixed-width instruction format.

/// Register naming conventions (`x0`, `a0`-`a12`, `ra`, `sp`).
pub mod abi;

/// Instruction decoding logic.
pub mod decode;

/// Instruction encoding structures, opcode enumeration, and bit extraction utilities.
pub mod instruction;

/// Opcode values.
pub mod opcodes;

pub use self::decode::decode;
pub use self::instruction::{Decoded, InstructionBits, Opcode, UnknownOpcode};
