//! Tracing setup: structured logging for hosts embedding the engine.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "ROSTER_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `ROSTER_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Safe to call more than once;
/// later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for tests or embedding hosts).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
