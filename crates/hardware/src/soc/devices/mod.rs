//! Built-in host environments.

/// Environment that ignores ECALL and terminates on EBREAK.
pub mod detached;

pub use detached::DetachedEnvironment;
