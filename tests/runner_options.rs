#![cfg(unix)]

mod common;
use crate::common::{init_tracing, sh, with_timeout};

use std::collections::BTreeMap;

use runwrap::errors::RunwrapError;
use runwrap::exec::{CommandSpec, ProcessRunner, RunOptions, RunnerDefaults};

#[tokio::test]
async fn working_directory_override_is_used() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().canonicalize().unwrap();

    let runner = ProcessRunner::default();
    let options = RunOptions::new()
        .capture_output(true)
        .working_directory(dir.path());

    let result = with_timeout(runner.run(&CommandSpec::new("pwd").arg("-P"), &options))
        .await
        .unwrap();

    assert_eq!(
        result.stdout_text().as_deref(),
        Some(format!("{}\n", expected.display()).as_str())
    );
}

#[tokio::test]
async fn missing_working_directory_is_not_reported_as_missing_command() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let runner = ProcessRunner::default();
    let options = RunOptions::new().working_directory(&missing);

    let err = runner
        .run(&CommandSpec::new("true"), &options)
        .await
        .unwrap_err();

    match err {
        RunwrapError::InvalidWorkingDirectory(path) => assert_eq!(path, missing),
        other => panic!("Expected InvalidWorkingDirectory, got: {:?}", other),
    }
}

#[tokio::test]
async fn env_override_is_visible_to_child() {
    let runner = ProcessRunner::default();
    let options = RunOptions::new()
        .capture_output(true)
        .env("RUNWRAP_GREETING", "hi there");

    let result = with_timeout(runner.run(&sh(r#"printf %s "$RUNWRAP_GREETING""#), &options))
        .await
        .unwrap();

    assert_eq!(result.stdout_text().as_deref(), Some("hi there"));
}

#[tokio::test]
async fn parent_environment_is_inherited_by_default() {
    // PATH is always present in the test harness environment.
    let expected = std::env::var("PATH").unwrap();

    let runner = ProcessRunner::default();
    let options = RunOptions::new().capture_output(true);
    let result = with_timeout(runner.run(&sh(r#"printf %s "$PATH""#), &options))
        .await
        .unwrap();

    assert_eq!(result.stdout_text().as_deref(), Some(expected.as_str()));
}

#[tokio::test]
async fn clear_env_starts_from_empty_environment() {
    let runner = ProcessRunner::default();
    let options = RunOptions::new()
        .capture_output(true)
        .clear_env(true)
        .env("ONLY", "1");

    let result = with_timeout(runner.run(&CommandSpec::new("/usr/bin/env"), &options))
        .await
        .unwrap();

    assert_eq!(result.stdout_text().as_deref(), Some("ONLY=1\n"));
}

#[tokio::test]
async fn runner_defaults_merge_with_call_options() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().canonicalize().unwrap();

    let runner = ProcessRunner::new(RunnerDefaults {
        timeout: None,
        working_directory: Some(dir.path().to_path_buf()),
        env: BTreeMap::from([
            ("RUNWRAP_A".to_string(), "from-defaults".to_string()),
            ("RUNWRAP_B".to_string(), "from-defaults".to_string()),
        ]),
    });
    let options = RunOptions::new()
        .capture_output(true)
        .env("RUNWRAP_B", "from-call");

    let result = with_timeout(runner.run(
        &sh(r#"printf '%s %s %s' "$RUNWRAP_A" "$RUNWRAP_B" "$(pwd -P)""#),
        &options,
    ))
    .await
    .unwrap();

    assert_eq!(
        result.stdout_text().as_deref(),
        Some(format!("from-defaults from-call {}", expected.display()).as_str())
    );
}
