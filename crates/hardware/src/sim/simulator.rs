//! Simulator: owns the CPU and the host environment side-by-side.
//!
//! Keeping the environment next to the `Cpu` instead of inside it lets the
//! control unit lend `&mut` registers and memory to the host during a trap.

use std::fmt;
use std::path::Path;

use super::loader::{self, LoadError};
use crate::config::{Config, ConfigError};
use crate::core::Cpu;
use crate::core::arch::CpuState;
use crate::soc::devices::DetachedEnvironment;
use crate::soc::traits::Environment;

/// Top-level simulator: CPU state plus the environment servicing its traps.
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    /// Host environment receiving `ECALL` and `EBREAK`.
    pub env: Box<dyn Environment>,
    max_instructions: Option<u64>,
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("cpu", &self.cpu)
            .field("max_instructions", &self.max_instructions)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator after validating `config`.
    pub fn new(config: &Config, env: Box<dyn Environment>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            env,
            max_instructions: config.general.max_instructions,
        })
    }

    /// Creates a simulator whose environment ignores `ECALL` and terminates on `EBREAK`.
    pub fn detached(config: &Config) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(DetachedEnvironment))
    }

    /// Loads a program and resets the CPU to its power-on state.
    pub fn load_program(&mut self, words: &[u32]) -> Result<(), LoadError> {
        loader::load_words(&mut self.cpu, words)?;
        self.cpu.reset();
        Ok(())
    }

    /// Loads a program image from disk and resets the CPU to its power-on state.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        loader::load_file(&mut self.cpu, path)?;
        self.cpu.reset();
        Ok(())
    }

    /// Executes one instruction.
    pub fn step(&mut self) -> CpuState {
        self.cpu.step(self.env.as_mut())
    }

    /// Runs until the core halts or faults, or the configured instruction limit is reached.
    ///
    /// # Returns
    ///
    /// The number of instructions retired and the final run-state.
    pub fn run(&mut self) -> (u64, CpuState) {
        let (retired, state) = self.cpu.run(self.env.as_mut(), self.max_instructions);
        tracing::debug!(retired, %state, "run finished");
        (retired, state)
    }

    /// Retrieves the exit code if the program requested one.
    pub fn take_exit(&mut self) -> Option<u32> {
        self.cpu.take_exit()
    }
}
