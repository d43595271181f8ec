// src/errors.rs

//! Crate-wide error type and aliases.
//!
//! A child that runs to completion with a non-zero exit code is *not* an
//! error here; that outcome is carried by
//! [`ExecutionResult`](crate::exec::ExecutionResult). Every variant below means
//! the command could not be run to completion at all.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::exec::RunState;

#[derive(Error, Debug)]
pub enum RunwrapError {
    #[error("Invalid command spec: {0}")]
    InvalidSpec(String),

    #[error("Working directory does not exist or is not a directory: {}", .0.display())]
    InvalidWorkingDirectory(PathBuf),

    #[error("Command not found or not executable: {program}")]
    CommandNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' timed out after {limit:?}")]
    Timeout { program: String, limit: Duration },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RunwrapError {
    /// Exit status the `runwrap` binary uses when a run fails with this error.
    ///
    /// Follows the shell conventions: 127 for a missing command, 124 for a
    /// timeout (as `timeout(1)` does), 2 for usage/config problems.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunwrapError::InvalidSpec(_)
            | RunwrapError::InvalidWorkingDirectory(_)
            | RunwrapError::ConfigError(_)
            | RunwrapError::TomlError(_) => 2,
            RunwrapError::CommandNotFound { .. } => 127,
            RunwrapError::Timeout { .. } => 124,
            RunwrapError::IoError(_) | RunwrapError::Other(_) => 1,
        }
    }

    /// The terminal [`RunState`] a run ends in when it fails with this error.
    ///
    /// Specs rejected before spawning count as `FailedToStart`. Errors that
    /// are not tied to a single run (config, I/O while waiting) yield `None`.
    pub fn terminal_state(&self) -> Option<RunState> {
        match self {
            RunwrapError::InvalidSpec(_)
            | RunwrapError::InvalidWorkingDirectory(_)
            | RunwrapError::CommandNotFound { .. } => Some(RunState::FailedToStart),
            RunwrapError::Timeout { .. } => Some(RunState::TimedOut),
            RunwrapError::ConfigError(_)
            | RunwrapError::IoError(_)
            | RunwrapError::TomlError(_)
            | RunwrapError::Other(_) => None,
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, RunwrapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_shell_conventions() {
        let not_found = RunwrapError::CommandNotFound {
            program: "nope".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(not_found.exit_code(), 127);

        let timeout = RunwrapError::Timeout {
            program: "sleep".to_string(),
            limit: Duration::from_millis(10),
        };
        assert_eq!(timeout.exit_code(), 124);

        assert_eq!(RunwrapError::InvalidSpec("empty".into()).exit_code(), 2);
        assert_eq!(
            RunwrapError::IoError(std::io::Error::other("boom")).exit_code(),
            1
        );
    }

    #[test]
    fn terminal_states_match_failure_kind() {
        assert_eq!(
            RunwrapError::InvalidSpec("empty".into()).terminal_state(),
            Some(RunState::FailedToStart)
        );
        assert_eq!(
            RunwrapError::Timeout {
                program: "x".into(),
                limit: Duration::from_secs(1),
            }
            .terminal_state(),
            Some(RunState::TimedOut)
        );
        assert_eq!(RunwrapError::ConfigError("bad".into()).terminal_state(), None);
    }
}
