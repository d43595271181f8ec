// src/exec/result.rs

use std::borrow::Cow;
use std::process::ExitStatus;
use std::time::Duration;

/// Output collected from a child run with `capture_output`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CapturedOutput {
    /// Stdout as text; invalid UTF-8 is replaced.
    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    /// Stderr as text; invalid UTF-8 is replaced.
    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// Whether a completed child reported success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NonZeroExit(i32),
}

/// The outcome of a child process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code; `128 + signal` when the child was killed by a signal.
    pub exit_code: i32,
    /// Terminating signal on unix, if any.
    pub signal: Option<i32>,
    /// Present only when capture was requested.
    pub output: Option<CapturedOutput>,
    pub elapsed: Duration,
}

impl ExecutionResult {
    pub(crate) fn from_status(
        status: ExitStatus,
        output: Option<CapturedOutput>,
        elapsed: Duration,
    ) -> Self {
        let signal = termination_signal(&status);
        let exit_code = match (status.code(), signal) {
            (Some(code), _) => code,
            (None, Some(sig)) => 128 + sig,
            (None, None) => -1,
        };

        Self {
            exit_code,
            signal,
            output,
            elapsed,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.signal.is_none()
    }

    pub fn outcome(&self) -> Outcome {
        if self.success() {
            Outcome::Success
        } else {
            Outcome::NonZeroExit(self.exit_code)
        }
    }

    /// Captured stdout as text, or `None` if output was not captured.
    pub fn stdout_text(&self) -> Option<Cow<'_, str>> {
        self.output.as_ref().map(CapturedOutput::stdout_text)
    }

    /// Captured stderr as text, or `None` if output was not captured.
    pub fn stderr_text(&self) -> Option<Cow<'_, str>> {
        self.output.as_ref().map(CapturedOutput::stderr_text)
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
