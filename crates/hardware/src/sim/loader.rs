//! Program Loader.
//!
//! This module reads LS-8 program files and populates CPU memory. It
//! performs the following:
//! 1. **Parsing:** One instruction byte per line, written in base 2; `#`
//!    starts a comment; whitespace is trimmed.
//! 2. **Skipping:** Blank and comment-only lines are skipped without
//!    advancing the address counter.
//! 3. **Loading:** Bytes are written to successive memory addresses
//!    starting at 0, before the dispatch loop starts.
//!
//! The loader validates only the file format; the core assumes memory
//! holds a well-formed program and checks nothing beyond per-instruction
//! bounds at execution time.

use std::fs;
use std::path::Path;

use crate::common::constants::{MEMORY_SIZE, PROGRAM_RADIX};
use crate::common::error::LoadError;
use crate::core::Cpu;

/// Parses LS-8 program text into instruction bytes.
///
/// # Arguments
///
/// * `source` - The program text, one base-2 byte per line.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] for a token that is not a base-2 byte, or
/// [`LoadError::TooLarge`] if the program exceeds memory capacity.
pub fn assemble(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let token = line.split('#').next().unwrap_or("").trim();
        if token.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(token, PROGRAM_RADIX).map_err(|_| LoadError::Parse {
            line: idx + 1,
            text: token.to_string(),
        })?;
        program.push(byte);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::TooLarge {
            size: program.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(program)
}

/// Reads a program file from disk and loads it into CPU memory at
/// address 0.
///
/// # Arguments
///
/// * `cpu`  - The CPU whose memory to populate.
/// * `path` - Path to the `.ls8` program file.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be read, or any
/// [`assemble`] error.
pub fn load_program(cpu: &mut Cpu, path: &str) -> Result<(), LoadError> {
    let source = fs::read_to_string(Path::new(path)).map_err(|source| LoadError::Open {
        path: path.to_string(),
        source,
    })?;
    let program = assemble(&source)?;

    // assemble caps the program at MEMORY_SIZE, so the copy cannot fault.
    cpu.ram
        .load(&program)
        .map_err(|_| LoadError::TooLarge {
            size: program.len(),
            capacity: MEMORY_SIZE,
        })
}
