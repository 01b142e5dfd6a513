// crates/iiko-client/src/lib.rs
// ============================================================================
// Module: iiko Client Library
// Description: Typed async REST client for the iiko back-office server.
// Purpose: Expose session handling, transport configuration, and domain APIs.
// Dependencies: reqwest, serde, sha1, time, tracing
// ============================================================================

//! ## Overview
//! This crate talks to the iiko back-office REST API (`/resto/api`). A single
//! [`IikoClient`] owns one HTTP transport and at most one server session. The
//! session key returned by login is attached to every later call and released
//! by logout. Domain endpoint groups (accounts, cash shifts, quick menus, menu
//! change documents, pricing, price periods, replication) borrow the client
//! and issue exactly one request per call: there is no retry and no partial
//! result handling.
//!
//! Passwords are digested with SHA-1 before transmission; neither the raw
//! password nor the session key is ever logged.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod session;
pub mod transport;


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use auth::PasswordDigest;
pub use auth::SessionToken;
pub use client::IikoClient;
pub use config::ClientConfig;
pub use config::ConfigError;
pub use error::ClientError;
pub use error::ErrorKind;
pub use session::SessionState;
