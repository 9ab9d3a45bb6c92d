//! Simulation Setup.
//!
//! Utilities that prepare a `Cpu` for execution; the core assumes memory
//! is already populated when the run loop starts.

/// Program-file loader.
pub mod loader;
