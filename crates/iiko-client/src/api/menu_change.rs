// crates/iiko-client/src/api/menu_change.rs
// ============================================================================
// Module: Menu Change API
// Description: Menu change documents and the prices they set.
// Purpose: Wrap `/v2/documents/menuChange*` and `/v2/price`.
// Dependencies: crate::transport, time
// ============================================================================

//! ## Overview
//! Document and price queries take a date window plus optional filters,
//! collected in [`MenuChangeQuery`] and [`PriceQuery`].

use time::Date;

use crate::api::REVISION_ALL;
use crate::error::ClientError;
use crate::models::Envelope;
use crate::models::MenuChangeDocumentDto;
use crate::models::MenuChangeDocumentStatus;
use crate::models::ProductPriceDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

// ============================================================================
// SECTION: Queries
// ============================================================================

/// Filter for `GET /v2/documents/menuChange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChangeQuery {
    /// First effective date.
    pub date_from: Date,
    /// Last effective date; open-ended when absent.
    pub date_to: Option<Date>,
    /// Restrict to one status.
    pub status: Option<MenuChangeDocumentStatus>,
    /// Revision watermark.
    pub revision_from: i64,
}

impl MenuChangeQuery {
    /// Documents effective from `date_from`, any status, every revision.
    #[must_use]
    pub const fn new(date_from: Date) -> Self {
        Self {
            date_from,
            date_to: None,
            status: None,
            revision_from: REVISION_ALL,
        }
    }

    /// Sets the last effective date.
    #[must_use]
    pub fn until(mut self, date_to: Date) -> Self {
        self.date_to = Some(date_to);
        self
    }

    /// Encodes the filter as query parameters.
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .date("dateFrom", self.date_from)
            .opt_date("dateTo", self.date_to)
            .opt_text("status", self.status.map(MenuChangeDocumentStatus::as_str))
            .int("revisionFrom", self.revision_from)
    }
}

/// Filter for `GET /v2/price`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    /// First date.
    pub date_from: Date,
    /// Last date; open-ended when absent.
    pub date_to: Option<Date>,
    /// Restrict to these departments; empty means all.
    pub department_ids: Vec<String>,
    /// Include items excluded from sale.
    pub include_out_of_sale: bool,
    /// Price type filter.
    pub price_type: Option<String>,
    /// Revision watermark.
    pub revision_from: i64,
}

impl PriceQuery {
    /// Prices from `date_from` in every department, every revision.
    #[must_use]
    pub const fn new(date_from: Date) -> Self {
        Self {
            date_from,
            date_to: None,
            department_ids: Vec::new(),
            include_out_of_sale: false,
            price_type: None,
            revision_from: REVISION_ALL,
        }
    }

    /// Restricts the query to one department.
    #[must_use]
    pub fn department(mut self, department_id: impl Into<String>) -> Self {
        self.department_ids.push(department_id.into());
        self
    }

    /// Encodes the filter as query parameters.
    fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .date("dateFrom", self.date_from)
            .opt_date("dateTo", self.date_to)
            .repeated("departmentId", &self.department_ids)
            .flag("includeOutOfSale", self.include_out_of_sale)
            .opt_text("type", self.price_type.as_deref())
            .int("revisionFrom", self.revision_from)
    }
}

// ============================================================================
// SECTION: API
// ============================================================================

/// Menu change endpoints.
#[derive(Debug, Clone, Copy)]
pub struct MenuChangeApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> MenuChangeApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists menu change documents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn documents(
        &self,
        query: &MenuChangeQuery,
    ) -> Result<Envelope<Vec<MenuChangeDocumentDto>>, ClientError> {
        self.transport.send_json(Request::get("v2/documents/menuChange", query.to_params())).await
    }

    /// Fetches one document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn by_id(&self, id: &str) -> Result<MenuChangeDocumentDto, ClientError> {
        let query = QueryParams::new().text("id", id);
        self.transport.send_json(Request::get("v2/documents/menuChange/byId", query)).await
    }

    /// Lists documents sharing a document number.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn by_number(
        &self,
        document_number: &str,
    ) -> Result<Vec<MenuChangeDocumentDto>, ClientError> {
        let query = QueryParams::new().text("documentNumber", document_number);
        self.transport.send_json(Request::get("v2/documents/menuChange/byNumber", query)).await
    }

    /// Lists product prices set by documents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn prices(
        &self,
        query: &PriceQuery,
    ) -> Result<Envelope<Vec<ProductPriceDto>>, ClientError> {
        self.transport.send_json(Request::get("v2/price", query.to_params())).await
    }

    /// Creates a document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn create(
        &self,
        document: &MenuChangeDocumentDto,
    ) -> Result<Envelope<MenuChangeDocumentDto>, ClientError> {
        let body = HttpTransport::json_body(document)?;
        self.transport.send_json(Request::post("v2/documents/menuChange", body)).await
    }
}
