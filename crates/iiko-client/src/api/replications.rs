// crates/iiko-client/src/api/replications.rs
// ============================================================================
// Module: Replications API
// Description: Server deployment mode and replication state.
// Purpose: Wrap `/replication/*` and gate chain-only calls on the server mode.
// Dependencies: crate::transport, tracing
// ============================================================================

//! ## Overview
//! Replication statuses exist only on chain office servers. Restaurant
//! servers answer those endpoints with an error, so callers that must not
//! fail on restaurant servers ask [`ReplicationsApi::require_chain`] first
//! and receive [`ClientError::NotApplicable`] instead of issuing the call.

use tracing::debug;

use crate::api::path_id;
use crate::error::ClientError;
use crate::models::ReplicationStatusDto;
use crate::models::ReplicationStatusesDto;
use crate::models::ServerType;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Replication endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ReplicationsApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> ReplicationsApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Returns the server deployment mode.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] for an unknown mode, or the call error.
    pub async fn server_type(&self) -> Result<ServerType, ClientError> {
        let body = self
            .transport
            .send_text(Request::get("replication/serverType", QueryParams::new()))
            .await?;
        ServerType::parse(&body)
            .ok_or_else(|| ClientError::Decode(format!("unknown server type: {}", body.trim())))
    }

    /// Fails with [`ClientError::NotApplicable`] unless the server is a chain.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotApplicable`] for restaurant servers, or the
    /// error of the server type call.
    pub async fn require_chain(&self) -> Result<ServerType, ClientError> {
        let server_type = self.server_type().await?;
        if server_type == ServerType::Chain {
            Ok(server_type)
        } else {
            debug!(server_type = %server_type, "chain-only replication call skipped");
            Err(ClientError::NotApplicable(format!(
                "replication status requires a CHAIN server, found {server_type}"
            )))
        }
    }

    /// Lists replication states of every department.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn statuses(&self) -> Result<ReplicationStatusesDto, ClientError> {
        self.transport.send_json(Request::get("replication/statuses", QueryParams::new())).await
    }

    /// Fetches the replication state of one department.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn department_status(
        &self,
        department_id: &str,
    ) -> Result<ReplicationStatusDto, ClientError> {
        let path = format!("replication/byDepartmentId/{}/status", path_id(department_id)?);
        self.transport.send_json(Request::get(&path, QueryParams::new())).await
    }
}
