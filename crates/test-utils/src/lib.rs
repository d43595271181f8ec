//! Shared helpers for runwrap's integration tests.

pub mod builders;
pub mod fake_executor;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Upper bound for a test that only runs short-lived children.
pub const DEFAULT_TEST_LIMIT: Duration = Duration::from_secs(10);

/// Initialise tracing for tests.
///
/// Logs go through `with_test_writer()`, so the harness only shows them for
/// failing tests. Without `RUST_LOG`, runwrap's own spans and events are
/// shown at debug (run state transitions, spawn and kill decisions) and
/// everything else at warn.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,runwrap=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// Await `f`, failing the test if it takes longer than `limit`.
///
/// Use a limit well above any timeout the run under test is configured with,
/// so a hang in the runner is told apart from the runner's own timeout.
pub async fn within<F, T>(limit: Duration, f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(limit, f).await {
        Ok(value) => value,
        Err(_) => panic!("run did not finish within {limit:?}"),
    }
}

/// [`within`] using [`DEFAULT_TEST_LIMIT`].
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    within(DEFAULT_TEST_LIMIT, f).await
}
