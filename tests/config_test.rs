//! Tests for loading configuration files.

use std::fs;
use tempfile::TempDir;

use timetravel_tictactoe::Config;

#[test]
fn test_from_file_reads_all_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tictactoe.toml");
    fs::write(
        &path,
        r#"log_file = "/tmp/ttt.log"
log_filter = "debug"
show_cell_numbers = false
highlight_winning_line = false
"#,
    )
    .expect("Failed to write TOML");

    let config = Config::from_file(&path).expect("Config loads");
    assert_eq!(config.log_file().to_str(), Some("/tmp/ttt.log"));
    assert_eq!(config.log_filter(), "debug");
    assert!(!config.show_cell_numbers());
    assert!(!config.highlight_winning_line());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "show_cell_numbers = \"maybe\"").expect("Write failed");

    let err = Config::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
