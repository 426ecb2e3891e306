//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Word Constants:** Word width and instruction size in bytes.
//! 2. **Register Constants:** Size of the architectural register file.
//! 3. **Layout Constants:** Default memory and stack geometry.

/// Size of a machine word (and of every instruction slot) in bytes.
pub const WORD_SIZE: u32 = 4;

/// Size of the two-word JMPL sequence in bytes.
pub const JMPL_SIZE: u32 = 2 * WORD_SIZE;

/// Number of architectural registers (x0, a0-a12, ra, sp).
pub const NUM_REGS: usize = 16;

/// Mask applied to shift amounts; counts are reduced modulo 32.
pub const SHAMT_MASK: u32 = 0x1F;

/// Default size of the flat memory in bytes (64 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 64 * 1024;

/// Default size of the stack region in bytes (4 KiB).
pub const DEFAULT_STACK_SIZE: u32 = 4 * 1024;

/// Address the program is loaded at and the PC starts from.
pub const PROGRAM_BASE: u32 = 0;
