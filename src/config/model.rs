// src/config/model.rs

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::exec::RunnerDefaults;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [defaults]
/// timeout = "30s"
/// working_directory = "/srv/app"
/// capture_output = false
///
/// [env]
/// RUST_LOG = "info"
/// ```
///
/// All sections are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// `[defaults]` section.
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// `[env]` section: variables applied to every child.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Duration string (e.g. `"3s"`); no timeout when absent.
    #[serde(default)]
    pub timeout: Option<String>,

    #[serde(default)]
    pub working_directory: Option<PathBuf>,

    /// Capture output unless the CLI says otherwise.
    #[serde(default)]
    pub capture_output: bool,
}

/// Validated configuration.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`),
/// so a `ConfigFile` always has a parsed timeout and a usable directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    timeout: Option<Duration>,
    working_directory: Option<PathBuf>,
    capture_output: bool,
    env: BTreeMap<String, String>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        timeout: Option<Duration>,
        working_directory: Option<PathBuf>,
        capture_output: bool,
        env: BTreeMap<String, String>,
    ) -> Self {
        Self {
            timeout,
            working_directory,
            capture_output,
            env,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn working_directory(&self) -> Option<&PathBuf> {
        self.working_directory.as_ref()
    }

    pub fn capture_output(&self) -> bool {
        self.capture_output
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Process-wide defaults to hand to `ProcessRunner::new`.
    pub fn runner_defaults(&self) -> RunnerDefaults {
        RunnerDefaults {
            timeout: self.timeout,
            working_directory: self.working_directory.clone(),
            env: self.env.clone(),
        }
    }
}
