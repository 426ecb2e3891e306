//! # Control Unit Tests
//!
//! Each test loads a small program through the harness and checks the
//! architectural state after it runs.





/// ECALL/EBREAK handoff, resume, and reset.
pub mod trap_handling;
