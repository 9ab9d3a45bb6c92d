//! LS-8 Flags Register.
//!
//! This module implements the FL register. It performs the following:
//! 1. **Storage:** One byte; only the low three bits are meaningful.
//! 2. **Comparison:** `set_compare` records the outcome of a CMP.
//! 3. **Queries:** Predicates read by the conditional jumps.
//!
//! Flags are not cleared between comparisons; they persist until the next
//! CMP overwrites them.

use std::cmp::Ordering;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// The FL register: `0b00000LGE`.
///
/// Exactly one of L, G, and E is set after a CMP; all three are clear on a
/// freshly constructed CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Creates a flags register with all bits clear.
    pub fn new() -> Self {
        Self(0)
    }

    /// Records the outcome of comparing `a` against `b`.
    ///
    /// Sets exactly one of Equal, Less-than, or Greater-than; the other two
    /// bits are cleared.
    pub fn set_compare(&mut self, a: u8, b: u8) {
        self.0 = match a.cmp(&b) {
            Ordering::Equal => FLAG_EQUAL,
            Ordering::Less => FLAG_LESS,
            Ordering::Greater => FLAG_GREATER,
        };
    }

    /// Returns true if the Equal bit is set.
    #[inline]
    pub fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Returns true if the Less-than bit is set.
    #[inline]
    pub fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// Returns true if the Greater-than bit is set.
    #[inline]
    pub fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Returns the raw FL byte.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}
