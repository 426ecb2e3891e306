//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the control unit for the
//! arithmetic and logic opcodes (`LI` through `SHR`). Every result wraps
//! modulo 2^32; the ALU never faults.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Li, Add, Sub
//! - [`logic`]:      And, Andi, Or, Ori, Xor, Xori
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (load immediate, add, subtract).
pub mod arithmetic;

/// Bitwise logical operations, register and immediate forms.
pub mod logic;

/// Logical shift operations.
pub mod shifts;

use crate::isa::Opcode;

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`  - The opcode to evaluate.
    /// * `a`   - Value of `rs1`.
    /// * `b`   - Value of `rs2`.
    /// * `imm` - Sign-extended immediate.
    ///
    /// # Returns
    ///
    /// The 32-bit result. Returns `0` for opcodes the ALU does not evaluate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rmachine_core::core::units::alu::Alu;
    /// use rmachine_core::isa::Opcode;
    ///
    /// assert_eq!(Alu::execute(Opcode::Add, 0xFFFF_FFFF, 1, 0), 0);
    /// assert_eq!(Alu::execute(Opcode::Sub, 10, 3, 2), 5);
    /// assert_eq!(Alu::execute(Opcode::Shl, 1, 30, 3), 2); // (30 + 3) mod 32 = 1
    /// assert_eq!(Alu::execute(Opcode::Li, 0, 0, -1), 0xFFFF_FFFF);
    /// ```
    pub fn execute(op: Opcode, a: u32, b: u32, imm: i32) -> u32 {
        match op {
            Opcode::Li | Opcode::Add | Opcode::Sub => arithmetic::execute(op, a, b, imm),

            Opcode::And
            | Opcode::Andi
            | Opcode::Or
            | Opcode::Ori
            | Opcode::Xor
            | Opcode::Xori => logic::execute(op, a, b, imm),

            Opcode::Shl | Opcode::Shr => shifts::execute(op, a, b, imm),

            // Control transfer, stack, memory and trap opcodes are not evaluated here.
            _ => 0,
        }
    }
}
