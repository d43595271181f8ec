// src/exec/spec.rs

//! The description of a child process to launch.

use std::fmt;

use crate::errors::{Result, RunwrapError};

/// Program name followed by its arguments.
///
/// A spec may be built empty (e.g. from an empty CLI trailer); it is only
/// checked when handed to [`ProcessRunner::run`](crate::exec::ProcessRunner::run),
/// which rejects it with [`RunwrapError::InvalidSpec`] before spawning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSpec {
    parts: Vec<String>,
}

impl CommandSpec {
    /// Start a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            parts: vec![program.into()],
        }
    }

    /// Build a spec from raw parts; the first element is the program.
    pub fn from_parts(parts: Vec<String>) -> Self {
        Self { parts }
    }

    /// Run `line` through the platform shell (`sh -c` / `cmd /C`).
    pub fn shell(line: impl Into<String>) -> Self {
        if cfg!(windows) {
            Self::new("cmd").arg("/C").arg(line)
        } else {
            Self::new("sh").arg("-c").arg(line)
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.parts.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts.extend(args.into_iter().map(Into::into));
        self
    }

    /// The executable name, if the spec is non-empty.
    pub fn program(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn arguments(&self) -> &[String] {
        self.parts.get(1..).unwrap_or(&[])
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check the invariants required before spawning and return the program.
    pub fn validate(&self) -> Result<&str> {
        match self.program() {
            None => Err(RunwrapError::InvalidSpec(
                "command spec must name a program".to_string(),
            )),
            Some("") => Err(RunwrapError::InvalidSpec(
                "program name must not be empty".to_string(),
            )),
            Some(program) => {
                if let Some(pos) = self.parts.iter().position(|p| p.contains('\0')) {
                    return Err(RunwrapError::InvalidSpec(format!(
                        "argument {pos} ('{}') contains a NUL byte",
                        self.parts[pos].escape_debug()
                    )));
                }
                Ok(program)
            }
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if part.is_empty() || part.chars().any(char::is_whitespace) {
                write!(f, "{part:?}")?;
            } else {
                f.write_str(part)?;
            }
        }
        Ok(())
    }
}
