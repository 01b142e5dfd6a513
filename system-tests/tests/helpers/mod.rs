// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for iiko system-tests.
// Purpose: Provide the stub server and live-suite utilities.
// Dependencies: system-tests, iiko-client
// ============================================================================

//! ## Overview
//! Shared helpers for iiko system-tests. The stub server backs the harness
//! suite; live suites use the date helpers to build query windows. The quick
//! menu round trip runs both live and against the stub.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod live;
