//! Common Types and Constants.
//!
//! This module gathers the definitions shared by every part of the emulator:
//! 1. **Constants:** Memory geometry, register conventions, and flag bits.
//! 2. **Errors:** The `Fault` and `LoadError` taxonomies.

/// Machine geometry and architectural constants.
pub mod constants;
/// Fault and load-error definitions.
pub mod error;

pub use error::{Fault, LoadError};
