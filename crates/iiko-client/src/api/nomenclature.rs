// crates/iiko-client/src/api/nomenclature.rs
// ============================================================================
// Module: Nomenclature API
// Description: Product lookups.
// Purpose: Wrap `GET /v2/entities/products/list`.
// Dependencies: crate::transport
// ============================================================================

//! Product lookups.

use crate::error::ClientError;
use crate::models::ProductDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Nomenclature endpoints.
#[derive(Debug, Clone, Copy)]
pub struct NomenclatureApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> NomenclatureApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn products(&self, include_deleted: bool) -> Result<Vec<ProductDto>, ClientError> {
        let query = QueryParams::new().flag("includeDeleted", include_deleted);
        self.transport.send_json(Request::get("v2/entities/products/list", query)).await
    }
}
