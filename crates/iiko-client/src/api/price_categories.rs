// crates/iiko-client/src/api/price_categories.rs
// ============================================================================
// Module: Price Categories API
// Description: Client price category lookups.
// Purpose: Wrap `/v2/entities/priceCategories*`.
// Dependencies: crate::transport
// ============================================================================

//! Client price category lookups, optionally narrowed to ids.

use crate::error::ClientError;
use crate::models::ClientPriceCategoryDto;
use crate::models::Envelope;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Price category endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PriceCategoriesApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> PriceCategoriesApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists price categories, optionally restricted to the given ids.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list<S: AsRef<str> + Sync>(
        &self,
        include_deleted: bool,
        ids: &[S],
        revision_from: i64,
    ) -> Result<Envelope<Vec<ClientPriceCategoryDto>>, ClientError> {
        let query = QueryParams::new()
            .flag("includeDeleted", include_deleted)
            .repeated("id", ids)
            .int("revisionFrom", revision_from);
        self.transport.send_json(Request::get("v2/entities/priceCategories", query)).await
    }

    /// Fetches one price category.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn by_id(&self, id: &str) -> Result<ClientPriceCategoryDto, ClientError> {
        let query = QueryParams::new().text("id", id);
        self.transport.send_json(Request::get("v2/entities/priceCategories/byId", query)).await
    }
}
