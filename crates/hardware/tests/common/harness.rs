use rmachine_core::config::Config;
use rmachine_core::core::Cpu;
use rmachine_core::{CpuState, Environment, Simulator};

/// Installs a test-writer subscriber once; `RUST_LOG` controls the filter.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::detached(config).expect("test configuration must be valid");
        Self { sim }
    }

    /// Replaces the host environment.
    pub fn with_env(mut self, env: impl Environment + 'static) -> Self {
        self.sim.env = Box::new(env);
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit words at address 0 and reset the CPU.
    pub fn load_program(mut self, program: &[u32]) -> Self {
        self.sim
            .load_program(program)
            .expect("test program must fit in memory");
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    pub fn pc(&self) -> u32 {
        self.sim.cpu.pc
    }

    pub fn state(&self) -> CpuState {
        self.sim.cpu.state()
    }

    /// Execute a single instruction.
    pub fn step(&mut self) -> CpuState {
        self.sim.step()
    }

    /// Run until the core stops or `max` instructions have been attempted.
    pub fn run(&mut self, max: u64) -> (u64, CpuState) {
        self.sim.cpu.run(self.sim.env.as_mut(), Some(max))
    }
}
