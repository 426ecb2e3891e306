//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions, the opcode enumeration, and the decoded
//! instruction structure for the fixed R-machine layout:
//!
//! ```text
//!  31            17 16  13 12   9 8    5 4      0
//! +----------------+------+------+------+--------+
//! |   imm[14:0]    | rs2  | rs1  |  rd  | opcode |
//! +----------------+------+------+------+--------+
//! ```

use std::fmt;

use thiserror::Error;

use super::opcodes;

/// Bit mask for extracting the opcode field (bits 0-4).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit mask for extracting a register field (4 bits).
pub const REG_MASK: u32 = 0xF;
/// Bit shift of the destination register field (bits 5-8).
pub const RD_SHIFT: u32 = 5;
/// Bit shift of the first source register field (bits 9-12).
pub const RS1_SHIFT: u32 = 9;
/// Bit shift of the second source register field (bits 13-16).
pub const RS2_SHIFT: u32 = 13;
/// Bit shift of the immediate field (bits 17-31).
pub const IMM_SHIFT: u32 = 17;
/// Width of the immediate field in bits.
pub const IMM_BITS: u32 = 15;
/// Bit mask for the unshifted immediate field (15 bits).
pub const IMM_MASK: u32 = (1 << IMM_BITS) - 1;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-4).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 5-8).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 9-12).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 13-16).
    fn rs2(&self) -> usize;

    /// Extracts the raw, unextended 15-bit immediate field (bits 17-31).
    fn imm_field(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm_field(&self) -> u32 {
        (self >> IMM_SHIFT) & IMM_MASK
    }
}

/// Returned when a 5-bit value names no instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown opcode {0:#07b}")]
pub struct UnknownOpcode(pub u32);

/// The 24 assigned R-machine operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Load immediate.
    Li,
    /// Add with immediate offset.
    Add,
    /// Bitwise and.
    And,
    /// Bitwise and with immediate.
    Andi,
    /// Bitwise or.
    Or,
    /// Bitwise or with immediate.
    Ori,
    /// Bitwise xor.
    Xor,
    /// Bitwise xor with immediate.
    Xori,
    /// Subtract `rs2 + imm`.
    Sub,
    /// Logical shift left.
    Shl,
    /// Logical shift right.
    Shr,
    /// Absolute jump.
    Jmp,
    /// Two-word absolute call.
    Jmpl,
    /// Return through `ra`.
    Ret,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Branch if less than (signed).
    Blt,
    /// Branch if greater or equal (signed).
    Bge,
    /// Push onto the stack.
    Push,
    /// Pop from the stack.
    Pop,
    /// Load word.
    Load,
    /// Store word.
    Store,
    /// Environment call.
    Ecall,
    /// Breakpoint.
    Ebreak,
}

impl Opcode {
    /// Every assigned opcode, in encoding order.
    pub const ALL: [Self; 24] = [
        Self::Li,
        Self::Add,
        Self::And,
        Self::Andi,
        Self::Or,
        Self::Ori,
        Self::Xor,
        Self::Xori,
        Self::Sub,
        Self::Shl,
        Self::Shr,
        Self::Jmp,
        Self::Jmpl,
        Self::Ret,
        Self::Beq,
        Self::Bne,
        Self::Blt,
        Self::Bge,
        Self::Push,
        Self::Pop,
        Self::Load,
        Self::Store,
        Self::Ecall,
        Self::Ebreak,
    ];

    /// The 5-bit encoding of this opcode.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Li => opcodes::OP_LI,
            Self::Add => opcodes::OP_ADD,
            Self::And => opcodes::OP_AND,
            Self::Andi => opcodes::OP_ANDI,
            Self::Or => opcodes::OP_OR,
            Self::Ori => opcodes::OP_ORI,
            Self::Xor => opcodes::OP_XOR,
            Self::Xori => opcodes::OP_XORI,
            Self::Sub => opcodes::OP_SUB,
            Self::Shl => opcodes::OP_SHL,
            Self::Shr => opcodes::OP_SHR,
            Self::Jmp => opcodes::OP_JMP,
            Self::Jmpl => opcodes::OP_JMPL,
            Self::Ret => opcodes::OP_RET,
            Self::Beq => opcodes::OP_BEQ,
            Self::Bne => opcodes::OP_BNE,
            Self::Blt => opcodes::OP_BLT,
            Self::Bge => opcodes::OP_BGE,
            Self::Push => opcodes::OP_PUSH,
            Self::Pop => opcodes::OP_POP,
            Self::Load => opcodes::OP_LOAD,
            Self::Store => opcodes::OP_STORE,
            Self::Ecall => opcodes::OP_ECALL,
            Self::Ebreak => opcodes::OP_EBREAK,
        }
    }

    /// Upper-case assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Li => "LI",
            Self::Add => "ADD",
            Self::And => "AND",
            Self::Andi => "ANDI",
            Self::Or => "OR",
            Self::Ori => "ORI",
            Self::Xor => "XOR",
            Self::Xori => "XORI",
            Self::Sub => "SUB",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
            Self::Jmp => "JMP",
            Self::Jmpl => "JMPL",
            Self::Ret => "RET",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Blt => "BLT",
            Self::Bge => "BGE",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Ecall => "ECALL",
            Self::Ebreak => "EBREAK",
        }
    }

    /// Arithmetic/logic opcodes, evaluated by the ALU and written to `rd`.
    pub const fn is_alu(self) -> bool {
        matches!(
            self,
            Self::Li
                | Self::Add
                | Self::And
                | Self::Andi
                | Self::Or
                | Self::Ori
                | Self::Xor
                | Self::Xori
                | Self::Sub
                | Self::Shl
                | Self::Shr
        )
    }

    /// Conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne | Self::Blt | Self::Bge)
    }
}

impl TryFrom<u32> for Opcode {
    type Error = UnknownOpcode;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            opcodes::OP_LI..=opcodes::OP_EBREAK => Ok(Self::ALL[(value - opcodes::OP_LI) as usize]),
            _ => Err(UnknownOpcode(value)),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Produced once per fetch and never persisted. The opcode is kept as raw
/// data; classification into an [`Opcode`] happens in the control unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted 5-bit opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Sign-extended immediate value.
    pub imm: i32,
}

impl Decoded {
    /// Classifies the opcode field.
    pub fn op(&self) -> Result<Opcode, UnknownOpcode> {
        Opcode::try_from(self.opcode)
    }
}
