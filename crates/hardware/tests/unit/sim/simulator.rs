//! # Simulator Tests

use rmachine_core::config::{Config, ConfigError};
use rmachine_core::{CpuState, Simulator};

// LI a0, 1 ; ADD a0, a0, x0, 1 ; JMP 4
const COUNTER_LOOP: [u32; 3] = [
    (1 << 17) | (1 << 5) | 0b00001,
    (1 << 17) | (1 << 9) | (1 << 5) | 0b00010,
    (4 << 17) | 0b01100,
];

#[test]
fn test_run_honours_configured_limit() {
    let config = Config::from_json(r#"{ "general": { "max_instructions": 7 } }"#).unwrap();
    let mut sim = Simulator::detached(&config).unwrap();
    sim.load_program(&COUNTER_LOOP).unwrap();

    let (retired, state) = sim.run();

    assert_eq!(retired, 7);
    assert_eq!(state, CpuState::Running);
    // LI, then three ADD/JMP pairs.
    assert_eq!(sim.cpu.regs.read(1), 4);
}

#[test]
fn test_step_executes_one_instruction() {
    let mut sim = Simulator::detached(&Config::default()).unwrap();
    sim.load_program(&COUNTER_LOOP).unwrap();

    assert_eq!(sim.step(), CpuState::Running);
    assert_eq!(sim.cpu.pc, 4);
    assert_eq!(sim.cpu.stats.instructions_retired, 1);
}

#[test]
fn test_load_program_resets_cpu() {
    let mut sim = Simulator::detached(&Config::default()).unwrap();
    sim.load_program(&[0]).unwrap();
    let _ = sim.step();
    assert!(sim.cpu.state().fault().is_some());

    sim.load_program(&COUNTER_LOOP).unwrap();

    assert_eq!(sim.cpu.state(), CpuState::Running);
    assert_eq!(sim.cpu.pc, 0);
    assert_eq!(sim.cpu.program_len(), 3);
}

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = Config::default();
    config.memory.size = 10;
    assert!(matches!(
        Simulator::detached(&config),
        Err(ConfigError::MemorySize(10))
    ));
}

#[test]
fn test_detached_environment_ignores_ecall() {
    let mut sim = Simulator::detached(&Config::default()).unwrap();
    sim.load_program(&[0b10111, 0b11000]).unwrap();

    let (retired, state) = sim.run();

    assert_eq!(retired, 2);
    assert_eq!(state, CpuState::Halted);
    assert_eq!(sim.take_exit(), None);
}
