//! Execution units and functional components.
//!
//! This module contains the stateless units the control unit dispatches to:
//! the ALU, the branch resolution unit, and the load/store address unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit (conditions and targets).
pub mod bru;

/// Load/Store Unit (effective address computation).
pub mod lsu;
