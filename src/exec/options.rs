// src/exec/options.rs

//! Per-call settings and process-wide defaults for [`ProcessRunner`].
//!
//! [`ProcessRunner`]: crate::exec::ProcessRunner

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for a single `run` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Collect child stdout/stderr instead of inheriting the parent's streams.
    pub capture_output: bool,

    /// Directory to run in; `None` means the runner default, then the
    /// caller's current directory.
    pub working_directory: Option<PathBuf>,

    /// Variables set on top of the inherited environment.
    pub env: BTreeMap<String, String>,

    /// Start from an empty environment before applying `env`.
    pub clear_env: bool,

    /// Maximum wall-clock time before the child is killed.
    pub timeout: Option<Duration>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    pub fn working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn clear_env(mut self, clear: bool) -> Self {
        self.clear_env = clear;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Process-wide defaults, typically loaded from `Runwrap.toml`.
///
/// Passed explicitly into [`ProcessRunner::new`](crate::exec::ProcessRunner::new).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerDefaults {
    pub timeout: Option<Duration>,
    pub working_directory: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
}

/// The options a run actually uses after merging defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EffectiveOptions<'a> {
    pub capture_output: bool,
    pub working_directory: Option<&'a Path>,
    pub env: BTreeMap<&'a str, &'a str>,
    pub clear_env: bool,
    pub timeout: Option<Duration>,
}

impl RunnerDefaults {
    /// Merge per-call `options` over these defaults.
    ///
    /// Per-call values win; env maps are unioned with per-call keys winning.
    pub(crate) fn resolve<'a>(&'a self, options: &'a RunOptions) -> EffectiveOptions<'a> {
        let mut env: BTreeMap<&str, &str> = self
            .env
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        env.extend(options.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        EffectiveOptions {
            capture_output: options.capture_output,
            working_directory: options
                .working_directory
                .as_deref()
                .or(self.working_directory.as_deref()),
            env,
            clear_env: options.clear_env,
            timeout: options.timeout.or(self.timeout),
        }
    }
}
