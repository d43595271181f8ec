// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running a caller-described
//! command with `tokio::process::Command` and reporting how it ended.
//!
//! - [`spec`] describes what to run (`CommandSpec`).
//! - [`options`] holds per-call settings and process-wide defaults.
//! - [`runner`] owns the spawn / wait / timeout logic (`ProcessRunner`).
//! - [`guard`] guarantees the child is reaped or killed on every exit path.
//! - [`result`] and [`state`] describe the outcome and lifecycle of a run.
//! - [`backend`] provides the `CommandExecutor` trait, implemented by
//!   `ProcessRunner` and replaceable by a fake in tests.

pub mod backend;
pub mod guard;
pub mod options;
pub mod result;
pub mod runner;
pub mod spec;
pub mod state;

pub use backend::CommandExecutor;
pub use guard::ChildGuard;
pub use options::{RunOptions, RunnerDefaults};
pub use result::{CapturedOutput, ExecutionResult, Outcome};
pub use runner::ProcessRunner;
pub use spec::CommandSpec;
pub use state::RunState;
