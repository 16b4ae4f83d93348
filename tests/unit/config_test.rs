//! Tests for report configuration loading

use std::fs;

use checkreport::adapters::EmojiStyle;
use checkreport::config::{ConfigError, ReportConfig};
use checkreport::core::models::CheckState;
use checkreport::paths;
use tempfile::TempDir;

#[test]
fn loads_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        paths::project_config(dir.path()),
        r#"
title = "Preview Report"
heading = "Application Checks"
show_debug_info = true
label_filter = "staging"
fail_on = "warning"
emoji = "gitlab"
"#,
    )
    .unwrap();

    let config = ReportConfig::load(dir.path()).unwrap();
    assert_eq!(config.title, "Preview Report");
    assert_eq!(config.heading, "Application Checks");
    assert!(config.show_debug_info);
    assert_eq!(config.label_filter.as_deref(), Some("staging"));
    assert_eq!(config.fail_on, CheckState::Warning);
    assert_eq!(config.emoji, EmojiStyle::Gitlab);
}

#[test]
fn render_options_follow_config() {
    let config: ReportConfig = toml::from_str("title = \"T\"\nheading = \"H\"").unwrap();
    let options = config.render_options();
    assert_eq!(options.title, "T");
    assert_eq!(options.heading, "H");
    assert!(options.footer.is_none());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "fail_on = \"catastrophic\"").unwrap();

    let err = ReportConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ReportConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn config_roundtrips_through_toml() {
    let config = ReportConfig {
        label_filter: Some("prod".to_string()),
        ..ReportConfig::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let back: ReportConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
