// crates/iiko-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error taxonomy for iiko client calls.
// Purpose: Let callers branch on failure kinds instead of message text.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every client call returns [`ClientError`] on failure. [`ClientError::kind`]
//! folds the variants into a small [`ErrorKind`] set that test harnesses use
//! to decide whether a failure is tolerated. Kinds are derived from HTTP
//! status codes and local state only; server message text is carried for
//! display but never inspected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::config::ConfigError;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// iiko client errors.
///
/// # Invariants
/// - Variants are stable for error mapping and tests.
/// - String payloads are user-facing and may include untrusted server text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("client config error: {0}")]
    Config(String),
    /// Request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),
    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },
    /// Server answered with a non-success status.
    #[error("http status {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body preview.
        body: String,
    },
    /// Response body could not be decoded.
    #[error("response decode error: {0}")]
    Decode(String),
    /// Response size exceeds limits.
    #[error("response exceeds size limit ({actual} > {limit})")]
    ResponseTooLarge {
        /// Actual size in bytes.
        actual: usize,
        /// Maximum size in bytes.
        limit: usize,
    },
    /// Session lifecycle violation (no session, double login, use after logout).
    #[error("session error: {0}")]
    Session(String),
    /// Server accepted the request but reported `ERROR` in the envelope.
    #[error("request rejected by server: {}", errors.join("; "))]
    Rejected {
        /// Error entries reported by the server.
        errors: Vec<String>,
    },
    /// Operation does not apply to the server's deployment mode.
    #[error("operation not applicable: {0}")]
    NotApplicable(String),
}

/// Coarse classification of [`ClientError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credentials rejected or session expired (HTTP 401).
    Unauthorized,
    /// Authenticated user lacks the required right (HTTP 403).
    PermissionDenied,
    /// Target entity or endpoint does not exist (HTTP 404).
    NotFound,
    /// Operation is not valid for the server's deployment mode.
    NotApplicable,
    /// Envelope result was `ERROR`.
    Rejected,
    /// Other non-success HTTP status.
    Server,
    /// Connection failure or timeout.
    Transport,
    /// Undecodable or oversized response.
    Protocol,
    /// Invalid local configuration.
    Config,
    /// Session lifecycle violation.
    Session,
}

impl ErrorKind {
    /// Returns a stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::NotApplicable => "not_applicable",
            Self::Rejected => "rejected",
            Self::Server => "server",
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Config => "config",
            Self::Session => "session",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ClientError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Transport(_) | Self::Timeout { .. } => ErrorKind::Transport,
            Self::Http { status, .. } => match *status {
                401 => ErrorKind::Unauthorized,
                403 => ErrorKind::PermissionDenied,
                404 => ErrorKind::NotFound,
                _ => ErrorKind::Server,
            },
            Self::Decode(_) | Self::ResponseTooLarge { .. } => ErrorKind::Protocol,
            Self::Session(_) => ErrorKind::Session,
            Self::Rejected { .. } => ErrorKind::Rejected,
            Self::NotApplicable(_) => ErrorKind::NotApplicable,
        }
    }

    /// Returns the HTTP status when the server answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ConfigError> for ClientError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
