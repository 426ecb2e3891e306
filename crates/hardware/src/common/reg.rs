//! Register File.
//!
//! This module provides the `RegisterFile` struct, the interface the control unit
//! and the host environment use to access architectural registers. It provides:
//! 1. **Access:** Index-based reads and writes with the `x0` invariant enforced.
//! 2. **Conventions:** Named accessors for the return address and stack pointer.
//! 3. **Observability:** Snapshots and a register dump through `tracing`.

use crate::common::constants::NUM_REGS;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi;

/// Architectural register file of one R-machine instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { gpr: Gpr::new() }
    }

    /// Reads a register. Register `x0` always returns 0.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Writes a register. Writes to `x0` are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The 32-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// Current return address (`ra`, x14).
    #[inline]
    pub fn ra(&self) -> u32 {
        self.gpr.read(abi::REG_RA)
    }

    /// Sets the return address (`ra`, x14).
    #[inline]
    pub fn set_ra(&mut self, val: u32) {
        self.gpr.write(abi::REG_RA, val);
    }

    /// Current stack pointer (`sp`, x15).
    #[inline]
    pub fn sp(&self) -> u32 {
        self.gpr.read(abi::REG_SP)
    }

    /// Sets the stack pointer (`sp`, x15).
    #[inline]
    pub fn set_sp(&mut self, val: u32) {
        self.gpr.write(abi::REG_SP, val);
    }

    /// Copies all sixteen registers out, in index order.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        self.gpr.snapshot()
    }

    /// Overwrites every register from a snapshot. Slot 0 is ignored.
    pub fn restore(&mut self, values: &[u32; NUM_REGS]) {
        for (idx, &val) in values.iter().enumerate() {
            self.gpr.write(idx, val);
        }
    }

    /// Logs all registers at `info` level, four per line.
    pub fn dump(&self) {
        let regs = self.snapshot();
        for row in (0..NUM_REGS).step_by(4) {
            tracing::info!(
                "{:>4}={:#010x} {:>4}={:#010x} {:>4}={:#010x} {:>4}={:#010x}",
                abi::name(row),
                regs[row],
                abi::name(row + 1),
                regs[row + 1],
                abi::name(row + 2),
                regs[row + 2],
                abi::name(row + 3),
                regs[row + 3]
            );
        }
    }
}
