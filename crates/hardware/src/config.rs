//! Configuration system for the R-machine simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! machine instance. It provides:
//! 1. **Defaults:** Baseline memory and stack geometry.
//! 2. **Structures:** Hierarchical config for general, memory, and stack settings.
//! 3. **Validation:** Layout checks reported as `ConfigError`.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::WORD_SIZE;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::{DEFAULT_MEMORY_SIZE, DEFAULT_STACK_SIZE};

    /// Total size of the flat memory (64 KiB).
    pub const MEMORY_SIZE: usize = DEFAULT_MEMORY_SIZE;

    /// Size of the stack region below the stack top (4 KiB).
    pub const STACK_SIZE: u32 = DEFAULT_STACK_SIZE;
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Memory size is zero, not word-aligned, or not addressable with 32 bits.
    #[error("memory size {0} must be a non-zero multiple of 4 addressable with 32 bits")]
    MemorySize(usize),

    /// The stack top is not word-aligned or lies past the end of memory.
    #[error("stack top {top:#x} must be word-aligned and within memory of {memory_size} bytes")]
    StackTop {
        /// Configured stack top.
        top: u32,
        /// Configured memory size.
        memory_size: usize,
    },

    /// The stack region does not fit below the stack top.
    #[error("stack of {size} bytes does not fit below stack top {top:#x}")]
    StackSize {
        /// Configured stack top.
        top: u32,
        /// Configured stack size.
        size: u32,
    },
}

/// Root configuration structure for a machine instance.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Stack geometry.
    #[serde(default)]
    pub stack: StackConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use rmachine_core::Config;
    ///
    /// let config = Config::from_json(r#"{ "memory": { "size": 8192 } }"#)?;
    /// assert_eq!(config.memory.size, 8192);
    /// assert_eq!(config.stack_top(), 8192);
    /// # Ok::<(), rmachine_core::config::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the memory and stack layout are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let memory_size = self.memory.size;
        if memory_size == 0
            || !memory_size.is_multiple_of(WORD_SIZE as usize)
            || u32::try_from(memory_size).is_err()
        {
            return Err(ConfigError::MemorySize(memory_size));
        }

        let top = self.stack_top();
        if !top.is_multiple_of(WORD_SIZE) || top as usize > memory_size {
            return Err(ConfigError::StackTop { top, memory_size });
        }

        if self.stack.size > top {
            return Err(ConfigError::StackSize {
                top,
                size: self.stack.size,
            });
        }
        Ok(())
    }

    /// Initial stack pointer: the configured top, or the end of memory.
    pub fn stack_top(&self) -> u32 {
        self.stack
            .top
            .unwrap_or_else(|| u32::try_from(self.memory.size).unwrap_or(u32::MAX & !(WORD_SIZE - 1)))
    }

    /// Lowest address the stack may grow down to.
    pub fn stack_limit(&self) -> u32 {
        self.stack_top().saturating_sub(self.stack.size)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit a `trace` event for every retired instruction.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop `Simulator::run` after this many instructions (unbounded if unset).
    #[serde(default)]
    pub max_instructions: Option<u64>,
}

/// Flat memory configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Size of the address space in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Fault on word accesses at addresses that are not a multiple of four.
    #[serde(default = "MemoryConfig::default_enforce_alignment")]
    pub enforce_alignment: bool,
}

impl MemoryConfig {
    /// Returns the default memory size.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Alignment is enforced unless explicitly disabled.
    fn default_enforce_alignment() -> bool {
        true
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            enforce_alignment: true,
        }
    }
}

/// Stack region configuration.
///
/// The stack grows downward from `top`. Valid stack slots are
/// `[top - size, top)`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StackConfig {
    /// Initial stack pointer (defaults to the end of memory).
    #[serde(default)]
    pub top: Option<u32>,

    /// Size of the stack region in bytes.
    #[serde(default = "StackConfig::default_size")]
    pub size: u32,
}

impl StackConfig {
    /// Returns the default stack size.
    fn default_size() -> u32 {
        defaults::STACK_SIZE
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            top: None,
            size: defaults::STACK_SIZE,
        }
    }
}
