// system-tests/src/logging.rs
// ============================================================================
// Module: System Test Logging
// Description: Process-wide tracing subscriber for harness runs.
// Purpose: Route client and harness events to captured test output.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! The subscriber is installed at most once per test binary. `IIKO_LOG`
//! accepts a standard `EnvFilter` directive; without it the level is `info`,
//! or `debug` when body logging was requested for the run.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the log filter directive.
pub const LOG_FILTER_ENV: &str = "IIKO_LOG";

// ============================================================================
// SECTION: Setup
// ============================================================================

/// Returns the default filter directive for a run.
#[must_use]
pub const fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Installs the global subscriber unless one is already set.
///
/// Output goes through the libtest writer so it is captured per test.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));
    let layer = fmt::layer().with_target(true).with_test_writer();
    // A second call in the same binary finds the subscriber already set.
    let _ = Registry::default().with(filter).with(layer).try_init();
}
