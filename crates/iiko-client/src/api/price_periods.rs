// crates/iiko-client/src/api/price_periods.rs
// ============================================================================
// Module: Price Periods API
// Description: Period schedule lookups.
// Purpose: Wrap `/v2/entities/periodSchedules*`.
// Dependencies: crate::transport
// ============================================================================

//! Period schedule lookups, optionally narrowed to ids.

use crate::error::ClientError;
use crate::models::Envelope;
use crate::models::PeriodScheduleDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Period schedule endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PricePeriodsApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> PricePeriodsApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists period schedules, optionally restricted to the given ids.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list<S: AsRef<str> + Sync>(
        &self,
        include_deleted: bool,
        ids: &[S],
        revision_from: i64,
    ) -> Result<Envelope<Vec<PeriodScheduleDto>>, ClientError> {
        let query = QueryParams::new()
            .flag("includeDeleted", include_deleted)
            .repeated("id", ids)
            .int("revisionFrom", revision_from);
        self.transport.send_json(Request::get("v2/entities/periodSchedules", query)).await
    }

    /// Fetches one period schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn by_id(&self, id: &str) -> Result<PeriodScheduleDto, ClientError> {
        let query = QueryParams::new().text("id", id);
        self.transport.send_json(Request::get("v2/entities/periodSchedules/byId", query)).await
    }
}
