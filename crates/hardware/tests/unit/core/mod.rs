//! # Core Unit Tests


/// Control unit behavior, driven through whole programs.
pub mod cpu;
