// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for iiko system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: iiko-client
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a small typed structure for reuse across test cases.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::DEFAULT_DEPARTMENT_ID;
pub use env::DEFAULT_TEARDOWN_GRACE;
pub use env::HarnessConfig;
pub use env::HarnessEnv;
pub use env::read_env_strict;
