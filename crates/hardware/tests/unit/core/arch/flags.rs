//! # Flags Register Tests
//!
//! CMP must set exactly one of Equal, Less-than, and Greater-than.

use ls8_core::core::arch::Flags;
use proptest::prelude::*;

#[test]
fn test_flags_start_clear() {
    let fl = Flags::new();
    assert!(!fl.equal());
    assert!(!fl.less());
    assert!(!fl.greater());
    assert_eq!(fl.bits(), 0);
}

#[test]
fn test_compare_equal() {
    let mut fl = Flags::new();
    fl.set_compare(9, 9);
    assert!(fl.equal());
    assert!(!fl.less());
    assert!(!fl.greater());
}

#[test]
fn test_compare_less() {
    let mut fl = Flags::new();
    fl.set_compare(3, 9);
    assert!(fl.less());
    assert!(!fl.equal());
    assert!(!fl.greater());
}

#[test]
fn test_compare_greater() {
    let mut fl = Flags::new();
    fl.set_compare(9, 3);
    assert!(fl.greater());
    assert!(!fl.equal());
    assert!(!fl.less());
}

#[test]
fn test_flags_persist_until_next_compare() {
    let mut fl = Flags::new();
    fl.set_compare(1, 1);
    assert!(fl.equal());
    // Nothing clears flags between comparisons.
    assert!(fl.equal());
    fl.set_compare(2, 1);
    assert!(fl.greater());
    assert!(!fl.equal());
}

proptest! {
    /// Any comparison sets exactly one flag bit.
    #[test]
    fn prop_compare_sets_exactly_one_flag(a: u8, b: u8) {
        let mut fl = Flags::new();
        fl.set_compare(a, b);
        prop_assert_eq!(fl.bits().count_ones(), 1);
    }

    /// Comparing a value against itself always sets Equal.
    #[test]
    fn prop_compare_self_is_equal(a: u8) {
        let mut fl = Flags::new();
        fl.set_compare(a, a);
        prop_assert!(fl.equal());
    }
}
