#![allow(dead_code)]

pub use runwrap_test_utils::{init_tracing, with_timeout, within};

use runwrap::exec::CommandSpec;

/// `sh -c <line>`; the integration tests only run on unix.
pub fn sh(line: &str) -> CommandSpec {
    CommandSpec::new("sh").arg("-c").arg(line)
}
