// crates/iiko-client/src/models/envelope.rs
// ============================================================================
// Module: Result Envelopes
// Description: `{result, errors, response, revision}` wrapper used by v2 APIs.
// Purpose: Convert server-reported ERROR results into typed client errors.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Most v2 endpoints wrap their payload in an envelope. `result` is
//! `SUCCESS` or `ERROR`; on `ERROR` the payload may be absent and `errors`
//! explains why. `revision` is the watermark to pass as `revisionFrom` on the
//! next incremental fetch.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::ClientError;

/// Envelope outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultStatus {
    /// Request applied.
    Success,
    /// Request rejected; see `errors`.
    Error,
}

/// Generic result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Outcome marker.
    pub result: ResultStatus,
    /// Server-reported errors, present on `ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
    /// Payload, absent on some `ERROR` results.
    pub response: Option<T>,
    /// Revision watermark for incremental fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
}

impl<T> Envelope<T> {
    /// Returns true when the server reported `SUCCESS`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result == ResultStatus::Success
    }

    /// Renders the error entries as display strings.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        render_errors(self.errors.as_deref())
    }

    /// Unwraps the payload of a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] on `ERROR` and
    /// [`ClientError::Decode`] when a `SUCCESS` envelope has no payload.
    pub fn into_response(self) -> Result<T, ClientError> {
        if !self.is_success() {
            return Err(ClientError::Rejected {
                errors: self.error_messages(),
            });
        }
        self.response
            .ok_or_else(|| ClientError::Decode("success envelope has no response".to_string()))
    }
}

/// Renders server error entries. Strings pass through; objects contribute
/// their `value` or `message` field, falling back to compact JSON.
#[must_use]
pub fn render_errors(errors: Option<&[Value]>) -> Vec<String> {
    errors
        .unwrap_or_default()
        .iter()
        .map(|entry| match entry {
            Value::String(text) => text.clone(),
            Value::Object(map) => map
                .get("value")
                .or_else(|| map.get("message"))
                .and_then(Value::as_str)
                .map_or_else(|| entry.to_string(), str::to_string),
            other => other.to_string(),
        })
        .collect()
}
