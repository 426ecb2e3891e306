//! R-machine register naming conventions.
//!
//! Defines the conventional register roles and their indices. The roles are
//! enforced only by instruction semantics (JMPL/RET use `ra`, PUSH/POP use `sp`).

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (first general-purpose register, a0).
pub const REG_A0: usize = 1;
/// Register x2 (a1).
pub const REG_A1: usize = 2;
/// Register x3 (a2).
pub const REG_A2: usize = 3;
/// Register x13 (last general-purpose register, a12).
pub const REG_A12: usize = 13;
/// Register x14 (return address, ra).
pub const REG_RA: usize = 14;
/// Register x15 (stack pointer, sp).
pub const REG_SP: usize = 15;

const NAMES: [&str; 16] = [
    "x0", "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8", "a9", "a10", "a11", "a12", "ra",
    "sp",
];

/// Conventional name of a register (`x0`, `a0`..`a12`, `ra`, `sp`).
pub fn name(idx: usize) -> &'static str {
    NAMES[idx & 0xF]
}

/// Register index of the general-purpose register `aN`, if `n` is 0-12.
pub const fn a(n: usize) -> Option<usize> {
    if n <= 12 { Some(REG_A0 + n) } else { None }
}
