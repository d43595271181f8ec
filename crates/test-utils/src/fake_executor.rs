use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use runwrap::errors::Result;
use runwrap::exec::{CapturedOutput, CommandExecutor, CommandSpec, ExecutionResult, RunOptions};

/// A fake executor that:
/// - records every (spec, options) pair it was asked to run
/// - replies with scripted results in order, or exit code 0 once the script
///   is exhausted.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<(CommandSpec, RunOptions)>>>,
    replies: Arc<Mutex<VecDeque<Result<ExecutionResult>>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next reply.
    pub fn reply(self, result: Result<ExecutionResult>) -> Self {
        self.replies.lock().unwrap().push_back(result);
        self
    }

    /// Queue a completed run with the given exit code and no output.
    pub fn reply_exit(self, exit_code: i32) -> Self {
        self.reply(Ok(completed(exit_code, None)))
    }

    pub fn executed(&self) -> Vec<(CommandSpec, RunOptions)> {
        self.executed.lock().unwrap().clone()
    }
}

/// Build an `ExecutionResult` as a real run would report it.
pub fn completed(exit_code: i32, output: Option<CapturedOutput>) -> ExecutionResult {
    ExecutionResult {
        exit_code,
        signal: None,
        output,
        elapsed: Duration::from_millis(1),
    }
}

impl CommandExecutor for FakeExecutor {
    fn execute(
        &self,
        spec: CommandSpec,
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + '_>> {
        Box::pin(async move {
            spec.validate()?;
            self.executed.lock().unwrap().push((spec, options));
            let reply = self.replies.lock().unwrap().pop_front();
            reply.unwrap_or_else(|| Ok(completed(0, None)))
        })
    }
}
