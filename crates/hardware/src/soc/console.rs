//! Console Output Device.
//!
//! This module implements the one output device the LS-8 exposes. It
//! performs the following:
//! 1. **Decimal Output:** PRN writes a register value in decimal plus a
//!    line break.
//! 2. **Character Output:** PRA writes the single character whose code
//!    point is the register value.
//!
//! The sink is a boxed [`Write`] so the CLI can hand it stdout while tests
//! capture output in a buffer.

use std::fmt;
use std::io::{self, Write};

/// Console device backing the PRN and PRA instructions.
pub struct Console {
    sink: Box<dyn Write>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    /// Creates a console writing to an arbitrary sink.
    pub fn new(sink: Box<dyn Write>) -> Self {
        Self { sink }
    }

    /// Creates a console writing to the process stdout.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Writes the decimal representation of `val` followed by a line break.
    pub fn print_value(&mut self, val: u8) {
        writeln!(self.sink, "{val}").ok();
    }

    /// Writes the single character whose code point is `val`.
    pub fn print_char(&mut self, val: u8) {
        write!(self.sink, "{}", char::from(val)).ok();
    }

    /// Flushes the sink.
    ///
    /// PRA output carries no line break, so the CLI flushes before exiting.
    pub fn flush(&mut self) {
        self.sink.flush().ok();
    }
}
