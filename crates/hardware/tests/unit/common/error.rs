//! # Fault Tests
//!
//! Tests for fault messages and names.

use rmachine_core::common::{AccessType, Fault};
use rmachine_core::soc::MemError;

#[test]
fn test_invalid_opcode_display_carries_pc_and_word() {
    let fault = Fault::InvalidOpcode {
        pc: 0x10,
        raw: 0xDEAD_BEE0,
        opcode: 0,
    };
    let msg = fault.to_string();
    assert!(msg.contains("0x10"), "{msg}");
    assert!(msg.contains("0xdeadbee0"), "{msg}");
}

#[test]
fn test_out_of_bounds_display_names_access() {
    let fault = Fault::MemoryOutOfBounds {
        addr: 0x1_0000,
        access: AccessType::Write,
    };
    assert_eq!(fault.to_string(), "write out of bounds at 0x10000");
}

#[test]
fn test_misaligned_display() {
    let fault = Fault::Misaligned {
        addr: 0x6,
        access: AccessType::Fetch,
    };
    assert_eq!(fault.to_string(), "misaligned fetch at 0x6");
}

#[test]
fn test_fault_names() {
    assert_eq!(Fault::StackUnderflow { sp: 0 }.name(), "StackUnderflow");
    assert_eq!(Fault::StackOverflow { sp: 0 }.name(), "StackOverflow");
    assert_eq!(
        Fault::TruncatedInstruction { pc: 0 }.name(),
        "TruncatedInstruction"
    );
}

#[test]
fn test_mem_error_into_fault_keeps_address() {
    let err = MemError::OutOfBounds { addr: 0x40, len: 4 };
    assert_eq!(
        err.into_fault(AccessType::Read),
        Fault::MemoryOutOfBounds {
            addr: 0x40,
            access: AccessType::Read
        }
    );

    let err = MemError::Misaligned { addr: 0x41 };
    assert_eq!(
        err.into_fault(AccessType::Write),
        Fault::Misaligned {
            addr: 0x41,
            access: AccessType::Write
        }
    );
}

#[test]
fn test_fault_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Fault::StackUnderflow { sp: 0x100 });
    assert!(err.to_string().contains("0x100"));
}
