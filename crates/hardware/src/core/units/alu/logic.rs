//! ALU logical operations.
//!
//! Implements bitwise AND, OR and XOR in register-register and
//! register-immediate forms. Immediates are sign-extended before use, so
//! `ANDI` with a negative immediate keeps the upper bits of `rs1`.

use crate::isa::Opcode;

/// Executes a logical operation.
///
/// Returns `0` for non-logic opcodes.
pub fn execute(op: Opcode, a: u32, b: u32, imm: i32) -> u32 {
    let imm = imm as u32;
    match op {
        Opcode::And => a & b,
        Opcode::Andi => a & imm,
        Opcode::Or => a | b,
        Opcode::Ori => a | imm,
        Opcode::Xor => a ^ b,
        Opcode::Xori => a ^ imm,
        _ => 0,
    }
}
