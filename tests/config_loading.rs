// tests/config_loading.rs

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use runwrap::config::{load_and_validate, resolve_config};
use runwrap::errors::RunwrapError;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn full_config_becomes_runner_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = config_file(&format!(
        r#"
[defaults]
timeout = "3s"
working_directory = "{}"
capture_output = true

[env]
RUST_LOG = "info"
"#,
        dir.path().display()
    ));

    let cfg = load_and_validate(file.path()).unwrap();
    assert!(cfg.capture_output());

    let defaults = cfg.runner_defaults();
    assert_eq!(defaults.timeout, Some(Duration::from_secs(3)));
    assert_eq!(defaults.working_directory.as_deref(), Some(dir.path()));
    assert_eq!(defaults.env.get("RUST_LOG").map(String::as_str), Some("info"));
}

#[test]
fn invalid_timeout_returns_config_error() {
    let file = config_file(
        r#"
[defaults]
timeout = "forever"
"#,
    );

    match load_and_validate(file.path()) {
        Err(RunwrapError::ConfigError(msg)) => {
            assert!(msg.contains("timeout"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_working_directory_returns_config_error() {
    let file = config_file(
        r#"
[defaults]
working_directory = "/definitely/not/a/real/dir/runwrap"
"#,
    );

    match load_and_validate(file.path()) {
        Err(RunwrapError::ConfigError(msg)) => {
            assert!(msg.contains("working_directory"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_keys_are_toml_errors() {
    let file = config_file(
        r#"
[defaults]
timout = "3s"
"#,
    );

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(RunwrapError::TomlError(_))), "got {result:?}");
}

#[test]
fn explicit_missing_config_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_config(Some(&dir.path().join("Runwrap.toml")));
    assert!(matches!(result, Err(RunwrapError::IoError(_))), "got {result:?}");
}
