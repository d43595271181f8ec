// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::types::{EnvAssignment, parse_timeout};

/// Command-line arguments for `runwrap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runwrap",
    version,
    about = "Run a command and relay its exit status.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML) with default timeout, directory and env.
    ///
    /// Default: `Runwrap.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Capture the command's stdout/stderr and re-emit them after it exits.
    #[arg(long, overrides_with = "no_capture")]
    pub capture: bool,

    /// Inherit stdout/stderr even if the config enables capture.
    #[arg(long)]
    pub no_capture: bool,

    /// Directory to run the command in.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Set an environment variable for the command (repeatable).
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<EnvAssignment>,

    /// Start the command with an empty environment (before `--env`).
    #[arg(long)]
    pub clear_env: bool,

    /// Kill the command if it runs longer than this (e.g. 250ms, 3s, 1m).
    ///
    /// Must be greater than zero.
    #[arg(long, value_name = "DURATION", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Treat the command words as one line for the platform shell.
    #[arg(long)]
    pub shell: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNWRAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved command and options, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// The program to run followed by its arguments.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
