//! # Program Loader Tests
//!
//! The loader parses one base-2 byte per line, strips `#` comments, skips
//! blank lines without advancing the address counter, and writes bytes to
//! successive memory addresses starting at 0.

use std::io::Write;

use ls8_core::common::LoadError;
use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::sim::loader;
use ls8_core::soc::Console;
use pretty_assertions::assert_eq;

fn quiet_cpu() -> Cpu {
    Cpu::new(Console::new(Box::new(Vec::<u8>::new())), &Config::default())
}

#[test]
fn test_assemble_plain_program() {
    let program = loader::assemble("10000010\n00000000\n00001000\n00000001\n")
        .expect("well-formed program");
    assert_eq!(program, vec![0b1000_0010, 0, 8, 1]);
}

#[test]
fn test_assemble_strips_comments_and_whitespace() {
    let source = "  10000010  # LDI R0,8\n00000000\n00001000   # the immediate\n";
    let program = loader::assemble(source).expect("well-formed program");
    assert_eq!(program, vec![0b1000_0010, 0, 8]);
}

#[test]
fn test_assemble_skips_blank_and_comment_lines() {
    let source = "# header comment\n\n10000010\n\n# interlude\n00000000\n00001000\n";
    let program = loader::assemble(source).expect("well-formed program");
    // Skipped lines do not advance the address counter.
    assert_eq!(program, vec![0b1000_0010, 0, 8]);
}

#[test]
fn test_assemble_rejects_non_binary_token() {
    let err = loader::assemble("10000010\n2\n").expect_err("2 is not a binary digit");
    match err {
        LoadError::Parse { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "2");
        }
        other => panic!("expected a parse error, got {other}"),
    }
}

#[test]
fn test_assemble_rejects_overlong_byte() {
    // Nine bits do not fit in a byte.
    let err = loader::assemble("110000000\n").expect_err("nine bits");
    assert!(matches!(err, LoadError::Parse { line: 1, .. }));
}

#[test]
fn test_assemble_rejects_oversized_program() {
    let source = "00000000\n".repeat(257);
    let err = loader::assemble(&source).expect_err("does not fit in memory");
    assert!(matches!(
        err,
        LoadError::TooLarge {
            size: 257,
            capacity: 256
        }
    ));
}

#[test]
fn test_load_program_populates_memory_from_zero() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "10000010 # LDI R0,8\n00000000\n00001000\n00000001 # HLT\n")
        .expect("write program");

    let mut cpu = quiet_cpu();
    loader::load_program(&mut cpu, file.path().to_str().expect("utf-8 path"))
        .expect("loads cleanly");

    assert_eq!(cpu.ram.read(0), Ok(0b1000_0010));
    assert_eq!(cpu.ram.read(1), Ok(0));
    assert_eq!(cpu.ram.read(2), Ok(8));
    assert_eq!(cpu.ram.read(3), Ok(1));
}

#[test]
fn test_load_program_missing_file_is_open_error() {
    let mut cpu = quiet_cpu();
    let err = loader::load_program(&mut cpu, "no/such/file.ls8").expect_err("missing file");
    assert!(matches!(err, LoadError::Open { .. }));
}

#[test]
fn test_loaded_program_runs_to_halt() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "10000010\n00000000\n00001000\n10000010\n00000001\n00001001\n\
         10100010\n00000000\n00000001\n01000111\n00000000\n00000001\n"
    )
    .expect("write program");

    let mut cpu = quiet_cpu();
    loader::load_program(&mut cpu, file.path().to_str().expect("utf-8 path"))
        .expect("loads cleanly");
    cpu.run().expect("clean halt");
    assert!(cpu.halted);
}
