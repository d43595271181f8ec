// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use std::io::Write;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, resolve_config};
use crate::errors::Result;
use crate::exec::{CommandExecutor, CommandSpec, ExecutionResult, ProcessRunner, RunOptions};
use crate::types::shell_line;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (explicit `--config` or `Runwrap.toml`)
/// - a `ProcessRunner` seeded with the config defaults
/// - command dispatch via [`run_with`]
///
/// Returns the exit status the wrapper itself should exit with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config = resolve_config(args.config.as_deref())?;
    let runner = ProcessRunner::new(config.runner_defaults());
    run_with(&args, &config, &runner).await
}

/// Run the command described by `args` through `executor`.
///
/// On completion the child's exit code is returned; with capture enabled its
/// output is re-emitted on our own stdout/stderr first.
pub async fn run_with<E>(args: &CliArgs, config: &ConfigFile, executor: &E) -> Result<i32>
where
    E: CommandExecutor + ?Sized,
{
    let (spec, options) = build_invocation(args, config);
    spec.validate()?;

    if args.dry_run {
        print_dry_run(&spec, &options, config);
        return Ok(0);
    }

    let result = executor.execute(spec, options).await?;
    emit_captured_output(&result)?;

    info!(exit_code = result.exit_code, outcome = ?result.outcome(), "command finished");
    Ok(result.exit_code)
}

/// Map the outcome of [`run`] to the wrapper's process exit status.
///
/// Does not report the failure; `main` prints it once to stderr.
pub fn exit_code(outcome: &Result<i32>) -> i32 {
    match outcome {
        Ok(code) => *code,
        Err(err) => {
            debug!(state = ?err.terminal_state(), "run failed");
            err.exit_code()
        }
    }
}

/// Turn CLI arguments (plus config-level capture default) into a spec and
/// per-call options.
///
/// With `--shell` the first word is shell source and later words are quoted
/// as literal arguments (see [`shell_line`]).
///
/// Timeout, directory and env defaults from the config are *not* folded in
/// here; `ProcessRunner` merges those itself.
pub fn build_invocation(args: &CliArgs, config: &ConfigFile) -> (CommandSpec, RunOptions) {
    let spec = if args.shell && !args.command.is_empty() {
        CommandSpec::shell(shell_line(&args.command))
    } else {
        CommandSpec::from_parts(args.command.clone())
    };

    let capture = if args.no_capture {
        false
    } else {
        args.capture || config.capture_output()
    };

    let mut options = RunOptions::new()
        .capture_output(capture)
        .clear_env(args.clear_env);
    if let Some(dir) = &args.cwd {
        options = options.working_directory(dir);
    }
    if let Some(timeout) = args.timeout {
        options = options.timeout(timeout);
    }
    for assignment in &args.env {
        options = options.env(&assignment.key, &assignment.value);
    }

    debug!(command = %spec, ?options, "built invocation");
    (spec, options)
}

fn emit_captured_output(result: &ExecutionResult) -> Result<()> {
    if let Some(output) = &result.output {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&output.stdout)?;
        stdout.flush()?;

        let mut stderr = std::io::stderr().lock();
        stderr.write_all(&output.stderr)?;
        stderr.flush()?;
    }
    Ok(())
}

/// Simple dry-run output: print the command and the options it would use.
fn print_dry_run(spec: &CommandSpec, options: &RunOptions, config: &ConfigFile) {
    let defaults = config.runner_defaults();
    let effective = defaults.resolve(options);

    println!("runwrap dry-run");
    println!("  command: {spec}");
    println!("  capture_output: {}", effective.capture_output);
    match effective.working_directory {
        Some(dir) => println!("  working_directory: {}", dir.display()),
        None => println!("  working_directory: (current)"),
    }
    match effective.timeout {
        Some(t) => println!("  timeout: {t:?}"),
        None => println!("  timeout: (none)"),
    }
    if effective.clear_env {
        println!("  clear_env: true");
    }
    for (key, value) in &effective.env {
        println!("  env: {key}={value}");
    }

    debug!("dry-run complete (no execution)");
}
