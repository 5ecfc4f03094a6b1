use super::*;
use std::io::Write;

#[test]
fn missing_config_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("rps.toml")).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn broken_config_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "last_moves = \"three\"").unwrap();

    assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
}
