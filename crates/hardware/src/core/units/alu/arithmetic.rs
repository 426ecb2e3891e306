//! ALU arithmetic operations.
//!
//! Implements load-immediate, addition and subtraction. Both `ADD` and `SUB`
//! fold the immediate into the second operand, and all sums wrap modulo 2^32.

use crate::isa::Opcode;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op`  - The opcode (must be `Li`, `Add` or `Sub`).
/// * `a`   - Value of `rs1`.
/// * `b`   - Value of `rs2`.
/// * `imm` - Sign-extended immediate.
///
/// # Returns
///
/// The wrapped 32-bit result, or `0` for non-arithmetic opcodes.
pub fn execute(op: Opcode, a: u32, b: u32, imm: i32) -> u32 {
    match op {
        Opcode::Li => imm as u32,
        Opcode::Add => a.wrapping_add(b).wrapping_add_signed(imm),
        Opcode::Sub => a.wrapping_sub(b.wrapping_add_signed(imm)),
        _ => 0,
    }
}
