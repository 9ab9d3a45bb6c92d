//! Execution Units.
//!
//! The LS-8 has a single execution unit: the arithmetic/logic unit.

/// Arithmetic/logic unit.
pub mod alu;
