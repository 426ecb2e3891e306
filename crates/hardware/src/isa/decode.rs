//! R-machine Instruction Decoder.
//!
//! This module decodes 32-bit instruction words into the structured `Decoded`
//! form. Every field sits at a fixed position, so decoding is a handful of
//! shifts and masks plus the sign-extension of the 15-bit immediate.
//!
//! Decoding is pure and total: an unassigned opcode value is returned as data
//! and rejected later by the control unit.

use crate::isa::instruction::{Decoded, IMM_BITS, InstructionBits};

/// Total width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// A `Decoded` structure with the opcode field, the three register indices,
/// and the immediate sign-extended from bit 31.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: sign_extend(inst.imm_field(), IMM_BITS),
    }
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
pub fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
