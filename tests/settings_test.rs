//! Tests for loading settings from TOML.

use std::io::Write;
use std::path::{Path, PathBuf};
use tictactoe_rewind::Settings;

fn write_settings(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_defaults_without_file() {
    let settings = Settings::load(None).expect("defaults");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_filter(), "info");
    assert_eq!(settings.title(), "Tic Tac Toe");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_settings("title = \"Rewind\"\n");
    let settings = Settings::from_file(file.path()).expect("valid settings");
    assert_eq!(settings.title(), "Rewind");
    assert_eq!(settings.log_file(), Path::new("tictactoe_rewind.log"));
}

#[test]
fn test_full_file() {
    let file = write_settings(
        "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\ntitle = \"Game\"\n",
    );
    let settings = Settings::load(Some(file.path())).expect("valid settings");
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_overrides() {
    let settings = Settings::default()
        .with_log_file(PathBuf::from("other.log"))
        .with_log_filter("trace".to_string());
    assert_eq!(settings.log_file(), Path::new("other.log"));
    assert_eq!(settings.log_filter(), "trace");
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_settings("board_size = 4\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}
