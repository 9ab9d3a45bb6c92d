//! Output Devices.
//!
//! The LS-8 exposes exactly one device to programs: a character/decimal
//! console driven by the PRN and PRA instructions.

/// Console output device.
pub mod console;

pub use console::Console;
