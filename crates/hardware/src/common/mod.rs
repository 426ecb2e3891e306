//! Common utilities and types used throughout the R-machine simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Machine-wide constants for words, registers, and default layout.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** The architectural fault taxonomy.
//! 4. **Register Management:** The register file interface shared with the host.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_REGS, WORD_SIZE};
pub use data::AccessType;
pub use error::Fault;
pub use reg::RegisterFile;
