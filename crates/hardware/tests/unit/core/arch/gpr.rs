//! # General-Purpose Register Tests
//!
//! Tests for the LS-8 register file implementation.

use ls8_core::common::Fault;
use ls8_core::core::arch::Gpr;
use proptest::prelude::*;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..8 {
        assert_eq!(gpr.read(i), Ok(0));
    }
}

#[test]
fn test_gpr_read_write_r0() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0x42).expect("valid index");
    assert_eq!(gpr.read(0), Ok(0x42));
}

#[test]
fn test_gpr_read_write_r7() {
    let mut gpr = Gpr::new();
    gpr.write(7, 0xF4).expect("valid index");
    assert_eq!(gpr.read(7), Ok(0xF4));
}

#[test]
fn test_gpr_register_independence() {
    let mut gpr = Gpr::new();
    gpr.write(1, 111).expect("valid index");
    gpr.write(2, 222).expect("valid index");
    gpr.write(3, 33).expect("valid index");

    assert_eq!(gpr.read(1), Ok(111));
    assert_eq!(gpr.read(2), Ok(222));
    assert_eq!(gpr.read(3), Ok(33));
}

#[test]
fn test_gpr_read_out_of_range_faults() {
    let gpr = Gpr::new();
    assert_eq!(gpr.read(8), Err(Fault::RegisterOutOfRange { index: 8 }));
    assert_eq!(gpr.read(255), Err(Fault::RegisterOutOfRange { index: 255 }));
}

#[test]
fn test_gpr_write_out_of_range_faults() {
    let mut gpr = Gpr::new();
    assert_eq!(
        gpr.write(8, 1),
        Err(Fault::RegisterOutOfRange { index: 8 })
    );
}

#[test]
fn test_gpr_dump_does_not_panic() {
    let mut gpr = Gpr::new();
    gpr.write(1, 0x12).expect("valid index");
    gpr.write(7, 0xF4).expect("valid index");
    gpr.dump(); // Should not panic
}

proptest! {
    /// Writing any value to any valid register reads back unchanged.
    #[test]
    fn prop_gpr_round_trip(idx in 0usize..8, val: u8) {
        let mut gpr = Gpr::new();
        gpr.write(idx, val).expect("valid index");
        prop_assert_eq!(gpr.read(idx), Ok(val));
    }
}
