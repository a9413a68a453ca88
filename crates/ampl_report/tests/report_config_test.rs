//! Tests for reporting configuration.

use ampl_report::ReportConfig;
use std::io::Write;
use tempfile::Builder;

#[test]
fn test_config_from_file() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
log_filter = "warn"
json_logs = true
warnings_as_errors = true
"#
    )
    .unwrap();

    let config = ReportConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.log_filter, "warn");
    assert!(config.json_logs);
    assert!(config.warnings_as_errors);
    assert!(config.error_handler().warnings_as_errors());
}

#[test]
fn test_missing_fields_use_defaults() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "json_logs = true").unwrap();

    let config = ReportConfig::from_file(temp_file.path()).unwrap();

    assert_eq!(config.log_filter, "info");
    assert!(config.json_logs);
    assert!(!config.warnings_as_errors);
}

#[test]
fn test_invalid_file_is_config_error() {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "json_logs = \"sometimes\"").unwrap();

    let err = ReportConfig::from_file(temp_file.path()).unwrap_err();

    assert!(err.engine().is_none());
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ReportConfig::from_file("/nonexistent/ampl.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read configuration"));
}

#[test]
fn test_load_bundled_defaults() {
    let config = ReportConfig::load().unwrap();

    // Bundled ampl.toml sets a crate-specific filter
    assert!(config.log_filter.contains("ampl_report"));
    assert_eq!(config.error_handler().warnings_as_errors(), config.warnings_as_errors);
}

#[test]
fn test_default_matches_plain_handler() {
    let config = ReportConfig::default();
    assert_eq!(config.log_filter, "info");
    assert!(!config.json_logs);
    assert!(!config.error_handler().warnings_as_errors());
}
