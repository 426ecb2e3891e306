//! Simulation utilities and program loading.
//!
//! Provides the program loader and the `Simulator`, which pairs a CPU with
//! the host environment that services its traps.

/// Program loading into memory.
pub mod loader;

/// CPU plus environment, driven as one unit.
pub mod simulator;

pub use self::loader::LoadError;
pub use self::simulator::Simulator;
