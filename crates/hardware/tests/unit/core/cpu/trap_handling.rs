//! # Trap Handling Tests
//!
//! Tests for the ECALL/EBREAK handoff to the host environment, and for the
//! host-side resume and reset controls.

use std::cell::Cell;
use std::rc::Rc;

use crate::common::builder::instruction::inst;
use crate::common::harness::TestContext;
use crate::common::mocks::environment::{FnEnvironment, MockEnvironment, MockHost};
use mockall::Sequence;
use mockall::predicate::eq;
use rmachine_core::common::{AccessType, Fault};
use rmachine_core::soc::{BreakDirective, EcallOutcome, TrapContext};
use rmachine_core::CpuState;

#[test]
fn test_ecall_hands_registers_to_host_and_resumes() {
    let mut host = MockHost::new();
    host.expect_ecall()
        .withf(|pc, regs| *pc == 4 && regs[1] == 7)
        .times(1)
        .return_const(EcallOutcome::Resume);
    host.expect_ebreak()
        .with(eq(8), mockall::predicate::always())
        .times(1)
        .return_const(BreakDirective::Terminate);

    let mut ctx = TestContext::new()
        .with_env(MockEnvironment::new(host))
        .load_program(&[
            inst().li(1, 7).build(),
            inst().ecall().build(),
            inst().ebreak().build(),
        ]);

    let (retired, state) = ctx.run(10);

    assert_eq!(retired, 3);
    assert_eq!(state, CpuState::Halted);
    assert_eq!(ctx.pc(), 8);
    assert_eq!(ctx.cpu().stats.traps, 2);
}

#[test]
fn test_ecall_host_writes_are_visible() {
    let env = FnEnvironment::new(
        |ctx: TrapContext<'_>| {
            let arg = ctx.regs.read(1);
            ctx.regs.write(1, arg * 2);
            ctx.mem.write_u32(0x800, arg).unwrap();
            EcallOutcome::Resume
        },
        |_: TrapContext<'_>| BreakDirective::Terminate,
    );
    let mut ctx = TestContext::new().with_env(env).load_program(&[
        inst().li(1, 21).build(),
        inst().ecall().build(),
        inst().load(2, 0, 0, 0x800).build(),
        inst().ebreak().build(),
    ]);

    let _ = ctx.run(10);

    assert_eq!(ctx.get_reg(1), 42);
    assert_eq!(ctx.get_reg(2), 21);
}

#[test]
fn test_ecall_exit_halts_with_code() {
    let mut host = MockHost::new();
    host.expect_ecall().times(1).return_const(EcallOutcome::Exit(3));
    host.expect_ebreak().never();

    let mut ctx = TestContext::new()
        .with_env(MockEnvironment::new(host))
        .load_program(&[
            inst().ecall().build(),
            inst().li(1, 1).build(),
        ]);

    let (_, state) = ctx.run(10);

    assert_eq!(state, CpuState::Halted);
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.sim.take_exit(), Some(3));
    assert_eq!(ctx.sim.take_exit(), None);
}

#[test]
fn test_ebreak_freezes_pc_and_terminates() {
    let mut ctx = TestContext::new().load_program(&[
        inst().nop().build(),
        inst().ebreak().build(),
        inst().li(1, 1).build(),
    ]);

    let (_, state) = ctx.run(10);

    assert_eq!(state, CpuState::Halted);
    assert_eq!(ctx.pc(), 4);
    assert_eq!(ctx.step(), CpuState::Halted);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn test_resume_after_ebreak_continues_at_next_word() {
    let mut ctx = TestContext::new().load_program(&[
        inst().ebreak().build(),
        inst().li(1, 1).build(),
        inst().ebreak().build(),
    ]);
    let _ = ctx.run(10);
    assert_eq!(ctx.pc(), 0);

    ctx.cpu_mut().resume();
    let (_, state) = ctx.run(10);

    assert_eq!(state, CpuState::Halted);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.pc(), 8);
}

#[test]
fn test_ebreak_continue_directive() {
    let mut seq = Sequence::new();
    let mut host = MockHost::new();
    host.expect_ebreak()
        .with(eq(0), mockall::predicate::always())
        .times(1)
        .in_sequence(&mut seq)
        .return_const(BreakDirective::Continue);
    host.expect_ebreak()
        .withf(|pc, regs| *pc == 8 && regs[1] == 1)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(BreakDirective::Terminate);

    let mut ctx = TestContext::new()
        .with_env(MockEnvironment::new(host))
        .load_program(&[
            inst().ebreak().build(),
            inst().li(1, 1).build(),
            inst().ebreak().build(),
        ]);

    let (retired, state) = ctx.run(10);

    assert_eq!(retired, 3);
    assert_eq!(state, CpuState::Halted);
}

#[test]
fn test_ebreak_continue_at_directive() {
    let hits = Rc::new(Cell::new(0));
    let seen = Rc::clone(&hits);
    let env = FnEnvironment::new(
        |_: TrapContext<'_>| EcallOutcome::Resume,
        move |ctx: TrapContext<'_>| {
            seen.set(seen.get() + 1);
            if ctx.pc == 0 {
                BreakDirective::ContinueAt(8)
            } else {
                BreakDirective::Terminate
            }
        },
    );
    let mut ctx = TestContext::new().with_env(env).load_program(&[
        inst().ebreak().build(),
        inst().li(1, 1).build(),
        inst().li(2, 2).build(),
        inst().ebreak().build(),
    ]);

    let _ = ctx.run(10);

    assert_eq!(hits.get(), 2);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 2);
    assert_eq!(ctx.pc(), 12);
}

#[test]
fn test_ebreak_host_can_edit_registers() {
    let env = FnEnvironment::new(
        |_: TrapContext<'_>| EcallOutcome::Resume,
        |ctx: TrapContext<'_>| {
            if ctx.pc == 0 {
                ctx.regs.write(1, 100);
                BreakDirective::Continue
            } else {
                BreakDirective::Terminate
            }
        },
    );
    let mut ctx = TestContext::new().with_env(env).load_program(&[
        inst().ebreak().build(),
        inst().addi(2, 1, 1).build(),
        inst().ebreak().build(),
    ]);

    let _ = ctx.run(10);

    assert_eq!(ctx.get_reg(2), 101);
}

#[test]
fn test_resume_has_no_effect_unless_halted() {
    let mut ctx = TestContext::new().load_program(&[0]);
    let _ = ctx.step();

    ctx.cpu_mut().resume();

    assert_eq!(ctx.state().fault().map(|f| f.name()), Some("InvalidOpcode"));
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_reset_recovers_from_fault_keeping_memory() {
    let mut ctx = TestContext::new().load_program(&[
        inst().li(1, 3).build(),
        inst().pop(2).build(),
        inst().ebreak().build(),
    ]);
    let (_, state) = ctx.run(10);
    assert_eq!(state, CpuState::Faulted(Fault::StackUnderflow { sp: 0x1_0000 }));

    ctx.cpu_mut().reset();

    assert_eq!(ctx.state(), CpuState::Running);
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(15), 0x1_0000);
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);

    let _ = ctx.step();
    assert_eq!(ctx.get_reg(1), 3);
}

#[test]
fn test_ebreak_continue_at_outside_program_faults() {
    let env = FnEnvironment::new(
        |_: TrapContext<'_>| EcallOutcome::Resume,
        |_: TrapContext<'_>| BreakDirective::ContinueAt(0x400),
    );
    let mut ctx = TestContext::new().with_env(env).load_program(&[
        inst().nop().build(),
        inst().ebreak().build(),
    ]);

    let (_, state) = ctx.run(10);

    assert_eq!(
        state,
        CpuState::Faulted(Fault::MemoryOutOfBounds {
            addr: 0x400,
            access: AccessType::Fetch
        })
    );
    assert_eq!(ctx.pc(), 4);
}

#[test]
fn test_resume_past_last_word_faults() {
    let mut ctx = TestContext::new().load_program(&[inst().ebreak().build()]);
    let _ = ctx.step();
    assert_eq!(ctx.state(), CpuState::Halted);

    ctx.cpu_mut().resume();

    assert_eq!(
        ctx.state(),
        CpuState::Faulted(Fault::MemoryOutOfBounds {
            addr: 4,
            access: AccessType::Fetch
        })
    );
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn test_resume_at_misaligned_target_faults() {
    let mut ctx = TestContext::new().load_program(&[
        inst().ebreak().build(),
        inst().nop().build(),
    ]);
    let _ = ctx.step();

    ctx.cpu_mut().resume_at(2);

    assert_eq!(
        ctx.state(),
        CpuState::Faulted(Fault::Misaligned {
            addr: 2,
            access: AccessType::Fetch
        })
    );
}

#[test]
fn test_ecall_resume_off_last_word_faults_at_ecall() {
    let mut host = MockHost::new();
    host.expect_ecall().times(1).return_const(EcallOutcome::Resume);
    host.expect_ebreak().never();

    let mut ctx = TestContext::new()
        .with_env(MockEnvironment::new(host))
        .load_program(&[inst().ecall().build()]);

    assert_eq!(
        ctx.step(),
        CpuState::Faulted(Fault::MemoryOutOfBounds {
            addr: 4,
            access: AccessType::Fetch
        })
    );
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.cpu().stats.traps, 0);
}
