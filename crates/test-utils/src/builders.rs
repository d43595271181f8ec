#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use runwrap::cli::CliArgs;
use runwrap::config::{ConfigFile, DefaultsSection, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                defaults: DefaultsSection::default(),
                env: BTreeMap::new(),
            },
        }
    }

    pub fn timeout(mut self, duration: &str) -> Self {
        self.config.defaults.timeout = Some(duration.to_string());
        self
    }

    pub fn working_directory(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.defaults.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn capture_output(mut self, val: bool) -> Self {
        self.config.defaults.capture_output = val;
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.config.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `CliArgs` that goes through the real `clap` parser.
pub struct CliArgsBuilder {
    argv: Vec<String>,
    command: Vec<String>,
}

impl CliArgsBuilder {
    pub fn new() -> Self {
        Self {
            argv: vec!["runwrap".to_string()],
            command: Vec::new(),
        }
    }

    pub fn flag(mut self, flag: &str) -> Self {
        self.argv.push(flag.to_string());
        self
    }

    pub fn option(mut self, name: &str, value: &str) -> Self {
        self.argv.push(name.to_string());
        self.argv.push(value.to_string());
        self
    }

    pub fn command<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = parts.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> CliArgs {
        use clap::Parser;

        let mut argv = self.argv;
        argv.push("--".to_string());
        argv.extend(self.command);
        CliArgs::try_parse_from(argv).expect("Failed to parse CLI args from builder")
    }
}

impl Default for CliArgsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
