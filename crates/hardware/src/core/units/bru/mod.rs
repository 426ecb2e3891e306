//! Branch Resolution Unit (BRU).
//!
//! This module decides conditional branches and computes control-transfer
//! targets:
//! 1. **Conditions:** `BEQ`/`BNE` compare bit patterns, `BLT`/`BGE` compare as
//!    signed 32-bit integers.
//! 2. **Targets:** Branch displacements are relative to the branch itself;
//!    `JMP` immediates are absolute.

use crate::isa::Opcode;

/// Branch Resolution Unit.
#[derive(Debug, Clone, Copy)]
pub struct Bru;

impl Bru {
    /// Evaluates the condition of a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `op` - The branch opcode.
    /// * `a`  - Value of `rs1`.
    /// * `b`  - Value of `rs2`.
    ///
    /// # Returns
    ///
    /// `true` if the branch is taken. Non-branch opcodes are never taken.
    pub fn taken(op: Opcode, a: u32, b: u32) -> bool {
        match op {
            Opcode::Beq => a == b,
            Opcode::Bne => a != b,
            Opcode::Blt => (a as i32) < (b as i32),
            Opcode::Bge => (a as i32) >= (b as i32),
            _ => false,
        }
    }

    /// Target of a taken branch: `pc + imm`, wrapping modulo 2^32.
    #[inline]
    pub fn branch_target(pc: u32, imm: i32) -> u32 {
        pc.wrapping_add_signed(imm)
    }

    /// Target of `JMP`: the sign-extended immediate used as an absolute address.
    #[inline]
    pub fn jump_target(imm: i32) -> u32 {
        imm as u32
    }
}
