// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! The CLI entry point talks to a `CommandExecutor` instead of a concrete
//! [`ProcessRunner`]. Tests can swap in a fake that records what it was asked
//! to run and returns a scripted result without spawning anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::options::RunOptions;
use crate::exec::result::ExecutionResult;
use crate::exec::runner::ProcessRunner;
use crate::exec::spec::CommandSpec;

/// Trait abstracting how a command is executed.
///
/// Production code uses [`ProcessRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandExecutor: Send + Sync {
    fn execute(
        &self,
        spec: CommandSpec,
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>>;
}

impl CommandExecutor for ProcessRunner {
    fn execute(
        &self,
        spec: CommandSpec,
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>> {
        Box::pin(async move { self.run(&spec, &options).await })
    }
}
