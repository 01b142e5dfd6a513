// crates/iiko-client/src/api/accounts.rs
// ============================================================================
// Module: Accounts API
// Description: Chart-of-accounts listing.
// Purpose: Wrap `GET /v2/entities/accounts/list`.
// Dependencies: crate::transport
// ============================================================================

//! Chart-of-accounts listing.

use crate::error::ClientError;
use crate::models::AccountDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Account endpoints.
#[derive(Debug, Clone, Copy)]
pub struct AccountsApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> AccountsApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists accounts changed after `revision_from`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list(
        &self,
        include_deleted: bool,
        revision_from: i64,
    ) -> Result<Vec<AccountDto>, ClientError> {
        let query = QueryParams::new()
            .flag("includeDeleted", include_deleted)
            .int("revisionFrom", revision_from);
        self.transport.send_json(Request::get("v2/entities/accounts/list", query)).await
    }
}
