//! ALU shift operations.
//!
//! Implements shift-left logical (SHL) and shift-right logical (SHR).
//!
//! The shift amount is `rs2 + imm`, computed with wrapping arithmetic and
//! reduced modulo 32, so every count has a defined result.

use crate::common::constants::SHAMT_MASK;
use crate::isa::Opcode;

/// Computes the effective shift count, `(b + imm) mod 32`.
#[inline]
pub fn shift_amount(b: u32, imm: i32) -> u32 {
    b.wrapping_add_signed(imm) & SHAMT_MASK
}

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`  - The opcode (must be `Shl` or `Shr`).
/// * `a`   - The value to be shifted.
/// * `b`   - Value of `rs2`, added to `imm` to form the count.
/// * `imm` - Sign-extended immediate.
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub fn execute(op: Opcode, a: u32, b: u32, imm: i32) -> u32 {
    let sh = shift_amount(b, imm);
    match op {
        Opcode::Shl => a << sh,
        Opcode::Shr => a >> sh,
        _ => 0,
    }
}
