//! # Configuration Tests
//!
//! Defaults, partial JSON documents and load errors.

use std::io::Write;

use pretty_assertions::assert_eq;
use sim16_core::SimError;
use sim16_core::config::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0x0000);
    assert!(config.general.break_on_nop);
    assert!(config.reporter.show_stack);
    assert!(config.reporter.show_data_memory);
}

#[test]
fn test_empty_object_is_default() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: Config = serde_json::from_str(r#"{ "general": { "break_on_nop": false } }"#).unwrap();
    assert!(!config.general.break_on_nop);
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.reporter, ReporterConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "start_pc": 256, "trace_instructions": true }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.general.start_pc, 0x0100);
    assert!(config.general.trace_instructions);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    file.flush().unwrap();

    let err = Config::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, SimError::ConfigParse { .. }));
}

#[test]
fn test_out_of_range_pc_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "start_pc": 70000 }} }}"#).unwrap();
    file.flush().unwrap();

    assert!(matches!(
        Config::from_json_file(file.path()),
        Err(SimError::ConfigParse { .. })
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_json_file(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, SimError::ConfigRead { .. }));
}
