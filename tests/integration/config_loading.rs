//! Configuration loading through the public facade.

use pageforge::config::{ConfigLoader, ForgeConfig, DEFAULT_FALLBACK_MODEL, DEFAULT_PRIMARY_BASE_URL};
use std::io::Write as _;
use tempfile::Builder;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let file = write_config(
        r#"
[primary]
base_url = "https://engine.internal:8443"

[fallback]
model = "gemini-2.0-flash-lite"
"#,
    );

    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.primary.base_url, "https://engine.internal:8443");
    assert_eq!(config.fallback.model, "gemini-2.0-flash-lite");
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_yields_defaults() {
    let file = write_config("");
    let config = ConfigLoader::load_from_file(file.path()).unwrap();
    assert_eq!(config.primary.base_url, DEFAULT_PRIMARY_BASE_URL);
    assert_eq!(config.fallback.model, DEFAULT_FALLBACK_MODEL);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_validation_failure_reports_each_field() {
    let mut config = ForgeConfig::default();
    config.primary.base_url = String::new();
    config.fallback.model = String::new();

    let errors = config.validate().unwrap_err();
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(rendered.iter().any(|m| m.contains("Primary")));
    assert!(rendered.iter().any(|m| m.contains("Fallback")));
}

#[test]
fn test_missing_file_is_an_error() {
    let missing = std::path::Path::new("/nonexistent/pageforge.toml");
    assert!(ConfigLoader::load_from_file(missing).is_err());
}
