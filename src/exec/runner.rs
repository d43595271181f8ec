// src/exec/runner.rs

//! Spawn-and-wait for a single child process.

use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, RunwrapError};
use crate::exec::guard::ChildGuard;
use crate::exec::options::{EffectiveOptions, RunOptions, RunnerDefaults};
use crate::exec::result::{CapturedOutput, ExecutionResult};
use crate::exec::spec::CommandSpec;
use crate::exec::state::RunState;
use crate::types::validate_env_key;

/// Runs external commands and reports how they ended.
///
/// Holds no mutable state; concurrent `run` calls each own their child
/// exclusively.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    defaults: RunnerDefaults,
}

impl ProcessRunner {
    pub fn new(defaults: RunnerDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &RunnerDefaults {
        &self.defaults
    }

    /// Run `spec` to completion (or until the timeout elapses).
    ///
    /// A non-zero exit is reported through the returned [`ExecutionResult`],
    /// not as an error. On timeout the child is killed and reaped before
    /// [`RunwrapError::Timeout`] is returned.
    pub async fn run(&self, spec: &CommandSpec, options: &RunOptions) -> Result<ExecutionResult> {
        let program = spec.validate()?;
        let opts = self.defaults.resolve(options);
        check_working_directory(&opts)?;
        check_environment(&opts)?;

        let mut tracker = StateTracker::new(program);
        let mut cmd = build_command(program, spec, &opts);

        info!(command = %spec, capture = opts.capture_output, timeout = ?opts.timeout, "starting process");
        let started = Instant::now();

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                tracker.advance(RunState::FailedToStart);
                debug!(program = %program, error = %source, "failed to spawn process");
                return Err(RunwrapError::CommandNotFound {
                    program: program.to_string(),
                    source,
                });
            }
        };
        tracker.advance(RunState::Running);

        let mut guard = ChildGuard::new(child, program);
        debug!(program = %program, pid = ?guard.id(), "process spawned");

        let stdout = guard.take_stdout();
        let stderr = guard.take_stderr();
        let capture = opts.capture_output;

        let completion = async {
            let (status, stdout, stderr) =
                tokio::try_join!(guard.wait(), drain(stdout), drain(stderr))?;
            let output = capture.then_some(CapturedOutput { stdout, stderr });
            Ok::<_, std::io::Error>((status, output))
        };

        let finished = match opts.timeout {
            Some(limit) => tokio::time::timeout(limit, completion).await.ok(),
            None => Some(completion.await),
        };

        let (status, output) = match finished {
            Some(res) => res?,
            None => {
                // `limit` is always set on this branch.
                let limit = opts.timeout.unwrap_or_default();
                debug!(program = %program, ?limit, "process timed out; killing");
                guard.terminate().await?;
                tracker.advance(RunState::TimedOut);
                return Err(RunwrapError::Timeout {
                    program: program.to_string(),
                    limit,
                });
            }
        };

        tracker.advance(RunState::Completed);
        let result = ExecutionResult::from_status(status, output, started.elapsed());

        info!(
            program = %program,
            exit_code = result.exit_code,
            signal = ?result.signal,
            success = result.success(),
            elapsed = ?result.elapsed,
            "process exited"
        );

        Ok(result)
    }

    /// Blocking form of [`run`](Self::run) for callers outside a Tokio
    /// runtime. Must not be called from within an async context.
    pub fn run_blocking(&self, spec: &CommandSpec, options: &RunOptions) -> Result<ExecutionResult> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        rt.block_on(self.run(spec, options))
    }
}

fn check_working_directory(opts: &EffectiveOptions<'_>) -> Result<()> {
    if let Some(dir) = opts.working_directory {
        if !dir.is_dir() {
            return Err(RunwrapError::InvalidWorkingDirectory(dir.to_path_buf()));
        }
    }
    Ok(())
}

fn check_environment(opts: &EffectiveOptions<'_>) -> Result<()> {
    for (key, value) in &opts.env {
        validate_env_key(key).map_err(RunwrapError::InvalidSpec)?;
        if value.contains('\0') {
            return Err(RunwrapError::InvalidSpec(format!(
                "value of environment variable '{key}' contains a NUL byte"
            )));
        }
    }
    Ok(())
}

fn build_command(program: &str, spec: &CommandSpec, opts: &EffectiveOptions<'_>) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(spec.arguments());

    if opts.clear_env {
        cmd.env_clear();
    }
    cmd.envs(opts.env.iter().map(|(k, v)| (*k, *v)));

    if let Some(dir) = opts.working_directory {
        cmd.current_dir(dir);
    }

    if opts.capture_output {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    }

    cmd.stdin(Stdio::inherit()).kill_on_drop(true);
    cmd
}

/// Read a pipe to EOF; a missing pipe yields no bytes.
async fn drain<R>(pipe: Option<R>) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Tracks a run through its [`RunState`]s and logs every transition.
struct StateTracker<'a> {
    program: &'a str,
    state: RunState,
}

impl<'a> StateTracker<'a> {
    fn new(program: &'a str) -> Self {
        Self {
            program,
            state: RunState::NotStarted,
        }
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal run state transition {:?} -> {:?}",
            self.state,
            next
        );
        debug!(program = %self.program, from = ?self.state, to = ?next, "run state");
        self.state = next;
    }
}
