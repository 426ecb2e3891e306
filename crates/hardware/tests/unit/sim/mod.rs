
/// Simulator driver and instruction limits.
pub mod simulator;
