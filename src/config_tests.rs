use std::path::PathBuf;

use super::*;

#[test]
fn config_default_values() {
    let config = TallyConfig::default();
    assert_eq!(config.root, PathBuf::from("src"));
    assert_eq!(config.suffix, ".rs");
    assert!(config.test_marker.ends_with("tests"));
    assert!(config.test_marker.starts_with(std::path::MAIN_SEPARATOR));
}

#[test]
fn default_config_is_valid() {
    assert!(TallyConfig::default().validate().is_ok());
}

#[test]
fn new_sets_all_fields() {
    let config = TallyConfig::new("lib", ".py", "/spec");
    assert_eq!(config.root, PathBuf::from("lib"));
    assert_eq!(config.suffix, ".py");
    assert_eq!(config.test_marker, "/spec");
}

#[test]
fn empty_suffix_is_rejected() {
    let config = TallyConfig::new("src", "", "/tests");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("suffix"));
}

#[test]
fn empty_test_marker_is_rejected() {
    let config = TallyConfig::new("src", ".rs", "");
    let err = config.validate().unwrap_err();
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("test marker"));
}
