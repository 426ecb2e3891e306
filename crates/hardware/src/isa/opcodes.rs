//! R-machine Opcodes.
//!
//! Defines the 5-bit opcode values (bits 4-0). Values `00000` and
//! `11001`-`11111` are unassigned and decode to an invalid opcode.

/// Load immediate: `rd = imm`.
pub const OP_LI: u32 = 0b00001;
/// `rd = rs1 + rs2 + imm`.
pub const OP_ADD: u32 = 0b00010;
/// `rd = rs1 & rs2`.
pub const OP_AND: u32 = 0b00011;
/// `rd = rs1 & imm`.
pub const OP_ANDI: u32 = 0b00100;
/// `rd = rs1 | rs2`.
pub const OP_OR: u32 = 0b00101;
/// `rd = rs1 | imm`.
pub const OP_ORI: u32 = 0b00110;
/// `rd = rs1 ^ rs2`.
pub const OP_XOR: u32 = 0b00111;
/// `rd = rs1 ^ imm`.
pub const OP_XORI: u32 = 0b01000;
/// `rd = rs1 - (rs2 + imm)`.
pub const OP_SUB: u32 = 0b01001;
/// `rd = rs1 << (rs2 + imm)`.
pub const OP_SHL: u32 = 0b01010;
/// `rd = rs1 >> (rs2 + imm)` (logical).
pub const OP_SHR: u32 = 0b01011;
/// Absolute jump: `pc = imm`.
pub const OP_JMP: u32 = 0b01100;
/// Two-word call: `ra = pc + 8; pc = word[pc + 4]`.
pub const OP_JMPL: u32 = 0b01101;
/// Return: `pc = ra`.
pub const OP_RET: u32 = 0b01110;
/// Branch if equal.
pub const OP_BEQ: u32 = 0b01111;
/// Branch if not equal.
pub const OP_BNE: u32 = 0b10000;
/// Branch if less than (signed).
pub const OP_BLT: u32 = 0b10001;
/// Branch if greater or equal (signed).
pub const OP_BGE: u32 = 0b10010;
/// Push `rs1` onto the stack.
pub const OP_PUSH: u32 = 0b10011;
/// Pop the stack top into `rd`.
pub const OP_POP: u32 = 0b10100;
/// `rd = word[rs1 + rs2 + imm]`.
pub const OP_LOAD: u32 = 0b10101;
/// `word[rs1 + rs2 + imm] = rs2`.
pub const OP_STORE: u32 = 0b10110;
/// Environment call into the host.
pub const OP_ECALL: u32 = 0b10111;
/// Breakpoint: suspend and hand control to the host debugger.
pub const OP_EBREAK: u32 = 0b11000;
