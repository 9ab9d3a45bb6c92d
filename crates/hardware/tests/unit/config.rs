//! # Configuration Tests

use ls8_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(!config.general.print_stats);
    assert_eq!(config.machine.stack_start, 0xF4);
}

#[test]
fn test_deserialize_partial_json_keeps_defaults() {
    let config: Config =
        serde_json::from_str(r#"{ "general": { "trace_instructions": true } }"#)
            .expect("valid config");
    assert!(config.general.trace_instructions);
    assert!(!config.general.print_stats);
    assert_eq!(config.machine.stack_start, 0xF4);
}

#[test]
fn test_deserialize_full_json() {
    let config: Config = serde_json::from_str(
        r#"{
            "general": { "trace_instructions": false, "print_stats": true },
            "machine": { "stack_start": 128 }
        }"#,
    )
    .expect("valid config");
    assert!(config.general.print_stats);
    assert_eq!(config.machine.stack_start, 128);
}

#[test]
fn test_empty_json_is_all_defaults() {
    let config: Config = serde_json::from_str("{}").expect("valid config");
    assert_eq!(config.machine.stack_start, Config::default().machine.stack_start);
}
