//! Load/Store Unit (LSU).
//!
//! Computes effective addresses for `LOAD` and `STORE`. The address is
//! `rs1 + rs2 + imm` with wrapping arithmetic; bounds and alignment are
//! checked by the memory when the access is performed.

/// Load/Store Unit.
#[derive(Debug, Clone, Copy)]
pub struct Lsu;

impl Lsu {
    /// Effective address of a `LOAD` or `STORE`.
    #[inline]
    pub fn effective_address(base: u32, index: u32, imm: i32) -> u32 {
        base.wrapping_add(index).wrapping_add_signed(imm)
    }
}
