//! # Configuration Tests
//!
//! Defaults match the machine's timing, and JSON may override any subset.

use alto2_core::config::Config;
use pretty_assertions::assert_eq;

#[test]
fn defaults_match_machine_timing() {
    let config = Config::default();
    assert_eq!(config.timing.ucycle_ps, 169_542);
    assert_eq!(config.timing.display_word_ps, 24 * 49_600);
    assert_eq!(config.reset.reset_mode, 0xFFFF);
    assert!(!config.general.trace_microcode);
}

#[test]
fn empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "timing": { "ucycle_ps": 100 }, "reset": { "reset_mode": 65534 } }"#)
        .unwrap();
    assert_eq!(config.timing.ucycle_ps, 100);
    assert_eq!(config.timing.display_word_ps, 24 * 49_600);
    assert_eq!(config.reset.reset_mode, 0xFFFE);
}

#[test]
fn trace_flag_deserializes() {
    let config = Config::from_json(r#"{ "general": { "trace_microcode": true } }"#).unwrap();
    assert!(config.general.trace_microcode);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json(r#"{ "timing": { "ucycle_ps": "fast" } }"#).is_err());
}
