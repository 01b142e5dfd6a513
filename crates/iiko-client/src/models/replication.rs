// crates/iiko-client/src/models/replication.rs
// ============================================================================
// Module: Replication Models
// Description: Server deployment mode and per-department replication state.
// Purpose: Decode `/replication/*` payloads.
// Dependencies: serde, time
// ============================================================================

//! Server mode and replication status payloads.

use serde::Deserialize;
use serde::Serialize;
use time::PrimitiveDateTime;

/// Deployment mode of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerType {
    /// Chain office server; replication endpoints apply.
    Chain,
    /// Restaurant server replicating to a chain.
    ReplicatedRms,
    /// Single restaurant server.
    StandaloneRms,
}

impl ServerType {
    /// Returns the wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chain => "CHAIN",
            Self::ReplicatedRms => "REPLICATED_RMS",
            Self::StandaloneRms => "STANDALONE_RMS",
        }
    }

    /// Parses a wire label, accepting bare or JSON-quoted text.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_matches('"') {
            "CHAIN" => Some(Self::Chain),
            "REPLICATED_RMS" => Some(Self::ReplicatedRms),
            "STANDALONE_RMS" => Some(Self::StandaloneRms),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replication state of one department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationStatusDto {
    /// Department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    /// Department name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Last inbound exchange.
    #[serde(default, with = "crate::models::serde_opt_date_time")]
    pub last_receive_date: Option<PrimitiveDateTime>,
    /// Last outbound exchange.
    #[serde(default, with = "crate::models::serde_opt_date_time")]
    pub last_send_date: Option<PrimitiveDateTime>,
    /// Status label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Replication states of every department.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationStatusesDto {
    /// Per-department states.
    #[serde(default)]
    pub replication_status_dtoes: Vec<ReplicationStatusDto>,
}
