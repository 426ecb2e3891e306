//! # Register File Tests
//!
//! Tests for the register file interface shared by the control unit and hosts.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rmachine_core::common::{NUM_REGS, RegisterFile};
use rmachine_core::isa::abi;

#[test]
fn test_new_register_file_is_zeroed() {
    let regs = RegisterFile::new();
    assert_eq!(regs.snapshot(), [0; NUM_REGS]);
}

#[test]
fn test_named_accessors_alias_indices() {
    let mut regs = RegisterFile::new();
    regs.set_ra(0x100);
    regs.set_sp(0x200);
    assert_eq!(regs.read(abi::REG_RA), 0x100);
    assert_eq!(regs.read(abi::REG_SP), 0x200);

    regs.write(14, 8);
    assert_eq!(regs.ra(), 8);
}

#[test]
fn test_restore_ignores_slot_zero() {
    let mut values = [0u32; NUM_REGS];
    for (i, v) in values.iter_mut().enumerate() {
        *v = (i as u32) * 0x11;
    }
    values[0] = 0xFFFF_FFFF;

    let mut regs = RegisterFile::new();
    regs.restore(&values);

    let mut expected = values;
    expected[0] = 0;
    assert_eq!(regs.snapshot(), expected);
}

#[test]
fn test_abi_names() {
    assert_eq!(abi::name(abi::REG_ZERO), "x0");
    assert_eq!(abi::name(abi::REG_A0), "a0");
    assert_eq!(abi::name(abi::REG_A1), "a1");
    assert_eq!(abi::name(abi::REG_A2), "a2");
    assert_eq!(abi::name(abi::REG_A12), "a12");
    assert_eq!(abi::name(abi::REG_RA), "ra");
    assert_eq!(abi::name(abi::REG_SP), "sp");
    assert_eq!(abi::a(0), Some(abi::REG_A0));
    assert_eq!(abi::a(12), Some(abi::REG_A12));
    assert_eq!(abi::a(13), None);
}

proptest! {
    #[test]
    fn prop_x0_is_immutable(val in any::<u32>()) {
        let mut regs = RegisterFile::new();
        regs.write(abi::REG_ZERO, val);
        prop_assert_eq!(regs.read(abi::REG_ZERO), 0);
    }

    #[test]
    fn prop_write_then_read(idx in 1usize..NUM_REGS, val in any::<u32>()) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val);
        prop_assert_eq!(regs.read(idx), val);
        for other in (0..NUM_REGS).filter(|&i| i != idx) {
            prop_assert_eq!(regs.read(other), 0);
        }
    }
}
