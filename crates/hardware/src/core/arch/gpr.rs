//! R-machine General-Purpose Register File.
//!
//! This module implements the register storage for the R-machine architecture.
//! It performs the following:
//! 1. **Storage:** Maintains 16 integer registers (`x0`, `a0`-`a12`, `ra`, `sp`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.

use crate::common::constants::NUM_REGS;

/// General-Purpose Register file.
///
/// Contains 16 32-bit registers. Register `x0` is hardwired to zero and
/// cannot be modified. Indices come out of 4-bit instruction fields, so they
/// are always in range; the mask only guards host-supplied indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value. Register `x0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        let idx = idx & (NUM_REGS - 1);
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a register value. Writes to `x0` are discarded.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & (NUM_REGS - 1);
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Returns a copy of all sixteen registers, `x0` included as zero.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}
