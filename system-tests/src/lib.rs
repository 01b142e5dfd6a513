// system-tests/src/lib.rs
// ============================================================================
// Module: iiko System Tests Library
// Description: Session-scoped harness, environment config and shape checks.
// Purpose: Provide common utilities for the iiko system-test binaries.
// Dependencies: iiko-client, tokio, tracing
// ============================================================================

//! ## Overview
//! Every system-test case runs inside [`harness::with_session`]: the harness
//! reads the environment, logs in, runs the case body, and always logs out
//! and closes the client afterwards. Expected server refusals are declared
//! per call with [`harness::Tolerate`] by error kind. [`shape`] holds the
//! field-domain checks shared by the live suites.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod harness;
pub mod logging;
pub mod shape;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use config::HarnessConfig;
pub use harness::CallContext;
pub use harness::CaseFailure;
pub use harness::HarnessError;
pub use harness::SessionHarness;
pub use harness::Tolerate;
pub use harness::ensure;
pub use harness::with_env_session;
pub use harness::with_session;
