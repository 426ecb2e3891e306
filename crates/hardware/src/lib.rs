//! R-machine execution core.
//!
//! This crate implements the 32-bit, sixteen-register R-machine with the following:
//! 1. **ISA:** Fixed-width instruction layout, opcode table, and decoder.
//! 2. **Core:** Register file, ALU, branch and load/store units, and the control
//!    unit that sequences fetch, decode, and execute.
//! 3. **Memory:** A flat little-endian address space holding program and data.
//! 4. **Environment:** A host trait servicing `ECALL` and `EBREAK`.
//! 5. **Simulation:** Loader, configuration, and statistics collection.
//!
//! # Examples
//!
//! ```
//! use rmachine_core::{Config, CpuState, Simulator};
//!
//! // LI a0, 42 ; EBREAK
//! let program: [u32; 2] = [(42 << 17) | (1 << 5) | 0b00001, 0b11000];
//!
//! let mut sim = Simulator::detached(&Config::default())?;
//! sim.load_program(&program)?;
//! let (retired, state) = sim.run();
//!
//! assert_eq!(retired, 2);
//! assert_eq!(state, CpuState::Halted);
//! assert_eq!(sim.cpu.regs.read(1), 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Common types and constants (registers, faults, access types).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (arch state, functional units, control unit).
pub mod core;
/// Instruction set (opcodes, field layout, decode, ABI names).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Memory and host environment.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Architectural fault carried by `CpuState::Faulted`.
pub use crate::common::Fault;
/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Run-state of the control unit.
pub use crate::core::arch::CpuState;
/// CPU plus host environment; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Host trait for `ECALL`/`EBREAK`.
pub use crate::soc::Environment;
