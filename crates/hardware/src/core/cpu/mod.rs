//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the single owned aggregate
//! holding the whole machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, and run-state.
//! 2. **Memory:** The flat address space holding program and data.
//! 3. **Stack Geometry:** The stack top and limit used by PUSH and POP.
//! 4. **Host Control:** Resume after a halt, reset after a fault.
//!
//! Every instance is independent; nothing is shared between two `Cpu` values.

/// Fetch/decode/execute cycle and run loop.
pub mod execution;

/// Instruction fetch, load/store, and stack access handlers.
pub mod memory;

/// ECALL/EBREAK handoff and fault entry.
pub mod trap;

use crate::common::RegisterFile;
use crate::common::constants::{PROGRAM_BASE, WORD_SIZE};
use crate::config::Config;
use crate::core::arch::CpuState;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program Counter (byte address of the next instruction).
    pub pc: u32,
    /// Flat memory holding program words and data.
    pub mem: Memory,
    /// Emit a trace event for every retired instruction (forced on by the
    /// `always-trace` feature).
    pub trace: bool,
    /// Exit code requested by the host through ECALL.
    pub exit_code: Option<u32>,
    /// Execution statistics.
    pub stats: SimStats,

    state: CpuState,
    program_end: u32,
    stack_top: u32,
    stack_limit: u32,
}

impl Cpu {
    /// Creates a new CPU with an empty program.
    ///
    /// The PC starts at 0, the state at `Running`, and `sp` at the configured
    /// stack top. The configuration is expected to be valid
    /// (see [`Config::validate`]).
    ///
    /// # Arguments
    ///
    /// * `config` - The simulator configuration parameters.
    pub fn new(config: &Config) -> Self {
        let stack_top = config.stack_top();
        let mut regs = RegisterFile::new();
        regs.set_sp(stack_top);

        Self {
            regs,
            pc: PROGRAM_BASE,
            mem: Memory::new(config.memory.size, config.memory.enforce_alignment),
            trace: config.general.trace_instructions || cfg!(feature = "always-trace"),
            exit_code: None,
            stats: SimStats::default(),
            state: CpuState::Running,
            program_end: PROGRAM_BASE,
            stack_top,
            stack_limit: config.stack_limit(),
        }
    }

    /// Current run-state.
    #[inline]
    pub const fn state(&self) -> CpuState {
        self.state
    }

    /// End (exclusive) of the loaded program.
    #[inline]
    pub const fn program_end(&self) -> u32 {
        self.program_end
    }

    /// Number of program words loaded.
    pub const fn program_len(&self) -> u32 {
        (self.program_end - PROGRAM_BASE) / WORD_SIZE
    }

    /// Records the end of the program; called by the loader.
    pub(crate) fn set_program_end(&mut self, end: u32) {
        self.program_end = end;
    }

    /// Initial stack pointer; `POP` at or above it underflows.
    #[inline]
    pub const fn stack_top(&self) -> u32 {
        self.stack_top
    }

    /// Lowest stack address; `PUSH` below it and `POP` from below it overflow.
    #[inline]
    pub const fn stack_limit(&self) -> u32 {
        self.stack_limit
    }

    /// Leaves the `Halted` state and continues at the instruction after the halt.
    ///
    /// This is the host's explicit "continue" action. It has no effect unless
    /// the core is halted.
    pub fn resume(&mut self) {
        self.resume_at(self.pc.wrapping_add(WORD_SIZE));
    }

    /// Leaves the `Halted` state and continues at `pc`.
    ///
    /// A target that is misaligned or outside the loaded program faults the
    /// core instead, leaving the PC where it halted.
    pub fn resume_at(&mut self, pc: u32) {
        if self.state != CpuState::Halted {
            return;
        }
        match self.check_pc(pc) {
            Ok(()) => {
                tracing::debug!(from = self.pc, to = pc, "resuming after halt");
                self.pc = pc;
                self.state = CpuState::Running;
            }
            Err(fault) => self.enter_fault(fault),
        }
    }

    /// Returns the machine to its power-on state, keeping memory and the loaded program.
    ///
    /// Registers are zeroed, `sp` is set to the stack top, the PC to the program
    /// base, the state to `Running`, and statistics and exit code are cleared.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.regs.set_sp(self.stack_top);
        self.pc = PROGRAM_BASE;
        self.state = CpuState::Running;
        self.exit_code = None;
        self.stats = SimStats::default();
    }

    /// Retrieves the exit code if the program requested one.
    ///
    /// # Returns
    ///
    /// `Some(u32)` containing the exit code if finished, otherwise `None`.
    pub fn take_exit(&mut self) -> Option<u32> {
        self.exit_code.take()
    }

    /// Logs the current CPU state (PC, run-state and registers).
    pub fn dump_state(&self) {
        tracing::info!("pc = {:#010x} state = {}", self.pc, self.state);
        self.regs.dump();
    }
}
