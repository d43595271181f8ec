// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, RunwrapError};
use crate::types::{self, validate_env_key};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::RunwrapError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_working_directory(&raw)?;
        validate_env(&raw)?;
        let timeout = match raw.defaults.timeout.as_deref() {
            Some(s) => Some(parse_timeout(s)?),
            None => None,
        };

        Ok(ConfigFile::new_unchecked(
            timeout,
            raw.defaults.working_directory,
            raw.defaults.capture_output,
            raw.env,
        ))
    }
}

fn parse_timeout(s: &str) -> Result<std::time::Duration> {
    types::parse_timeout(s)
        .map_err(|e| RunwrapError::ConfigError(format!("[defaults].timeout is invalid: {e}")))
}

fn validate_working_directory(cfg: &RawConfigFile) -> Result<()> {
    if let Some(dir) = &cfg.defaults.working_directory {
        if !dir.is_dir() {
            return Err(RunwrapError::ConfigError(format!(
                "[defaults].working_directory '{}' is not an existing directory",
                dir.display()
            )));
        }
    }
    Ok(())
}

fn validate_env(cfg: &RawConfigFile) -> Result<()> {
    for (key, value) in cfg.env.iter() {
        validate_env_key(key).map_err(|e| RunwrapError::ConfigError(format!("[env]: {e}")))?;
        if value.contains('\0') {
            return Err(RunwrapError::ConfigError(format!(
                "[env].{key} value must not contain NUL"
            )));
        }
    }
    Ok(())
}
