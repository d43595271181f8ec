// src/exec/guard.rs

//! Scoped ownership of a spawned child process.
//!
//! A [`ChildGuard`] is the only handle to its child. Whatever path a run
//! takes out of [`ProcessRunner::run`](crate::exec::ProcessRunner::run)
//! (normal exit, timeout, error, or the future being dropped) the child is
//! reaped or killed before the guard goes away.

use std::io;
use std::process::ExitStatus;

use tokio::process::{Child, ChildStderr, ChildStdout};
use tracing::{debug, warn};

pub struct ChildGuard {
    child: Child,
    program: String,
    status: Option<ExitStatus>,
}

impl ChildGuard {
    /// Take ownership of `child`. The child should have been spawned with
    /// `kill_on_drop(true)`.
    pub fn new(child: Child, program: impl Into<String>) -> Self {
        Self {
            child,
            program: program.into(),
            status: None,
        }
    }

    /// OS process id; `None` once the child has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.stderr.take()
    }

    /// Exit status, if the child has already been reaped through this guard.
    pub fn status(&self) -> Option<ExitStatus> {
        self.status
    }

    /// Wait for the child to exit. Cancel-safe.
    pub async fn wait(&mut self) -> io::Result<ExitStatus> {
        if let Some(status) = self.status {
            return Ok(status);
        }
        let status = self.child.wait().await?;
        self.status = Some(status);
        Ok(status)
    }

    /// Kill the child (if still running) and reap it.
    ///
    /// Idempotent: once the child is gone, further calls return `Ok(())`.
    pub async fn terminate(&mut self) -> io::Result<()> {
        if self.status.is_some() {
            return Ok(());
        }

        if let Some(status) = self.child.try_wait()? {
            debug!(program = %self.program, ?status, "child already exited before terminate");
            self.status = Some(status);
            return Ok(());
        }

        debug!(program = %self.program, pid = ?self.child.id(), "killing child process");
        match self.child.start_kill() {
            Ok(()) => {}
            // Raced with a natural exit between try_wait and start_kill.
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => {}
            Err(e) => return Err(e),
        }

        let status = self.child.wait().await?;
        self.status = Some(status);
        Ok(())
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if self.status.is_some() {
            return;
        }
        // The child cannot be reaped synchronously here; tokio reaps it in the
        // background after the kill.
        if let Err(e) = self.child.start_kill() {
            if e.kind() != io::ErrorKind::InvalidInput {
                warn!(program = %self.program, error = %e, "failed to kill child on drop");
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::process::Stdio;

    use tokio::process::Command;

    use super::*;

    fn spawn_sleep() -> ChildGuard {
        let child = Command::new("sleep")
            .arg("30")
            .stdout(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .expect("spawn sleep");
        ChildGuard::new(child, "sleep")
    }

    #[tokio::test]
    async fn terminate_twice_is_ok() {
        let mut guard = spawn_sleep();
        assert!(guard.id().is_some());

        guard.terminate().await.expect("first terminate");
        guard.terminate().await.expect("second terminate");

        let status = guard.status().expect("child reaped");
        assert!(!status.success());
    }

    #[tokio::test]
    async fn terminate_after_natural_exit_is_ok() {
        let child = Command::new("true").spawn().expect("spawn true");
        let mut guard = ChildGuard::new(child, "true");

        let status = guard.wait().await.expect("wait");
        assert!(status.success());

        guard.terminate().await.expect("terminate after exit");
        assert_eq!(guard.status(), Some(status));
    }
}
