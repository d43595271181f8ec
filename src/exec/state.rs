// src/exec/state.rs

/// Lifecycle of a single `run` call.
///
/// ```text
/// NotStarted -> Running -> Completed
///                       -> TimedOut
/// NotStarted -> FailedToStart
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
    TimedOut,
    FailedToStart,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::TimedOut | RunState::FailedToStart
        )
    }

    pub fn can_transition_to(self, next: RunState) -> bool {
        matches!(
            (self, next),
            (RunState::NotStarted, RunState::Running)
                | (RunState::NotStarted, RunState::FailedToStart)
                | (RunState::Running, RunState::Completed)
                | (RunState::Running, RunState::TimedOut)
        )
    }
}
