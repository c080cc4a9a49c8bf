//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_arena::ArenaConfig;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_limit = 8").expect("write config");
    writeln!(file, "log_file = \"arena-test.log\"").expect("write config");

    let config = ArenaConfig::from_file(file.path()).expect("config loads");
    assert_eq!(*config.history_limit(), 8);
    assert_eq!(config.log_file(), &PathBuf::from("arena-test.log"));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = ArenaConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_limit = \"five\"").expect("write config");
    let err = ArenaConfig::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_default_file_is_read_when_present() {
    let dir = tempfile::tempdir().expect("temp dir");
    let default = dir.path().join("tictactoe_arena.toml");
    std::fs::write(&default, "history_limit = 7\n").expect("write config");

    let config = ArenaConfig::load_with_default(None, &default).expect("config loads");
    assert_eq!(*config.history_limit(), 7);
}

#[test]
fn test_missing_default_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let default = dir.path().join("tictactoe_arena.toml");

    let config = ArenaConfig::load_with_default(None, &default).expect("defaults apply");
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_explicit_path_wins_over_default() {
    let dir = tempfile::tempdir().expect("temp dir");
    let default = dir.path().join("default.toml");
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&default, "history_limit = 7\n").expect("write config");
    std::fs::write(&explicit, "history_limit = 2\n").expect("write config");

    let config = ArenaConfig::load_with_default(Some(explicit.as_path()), &default)
        .expect("config loads");
    assert_eq!(*config.history_limit(), 2);
}
