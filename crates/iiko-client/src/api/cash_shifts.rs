// crates/iiko-client/src/api/cash_shifts.rs
// ============================================================================
// Module: Cash Shifts API
// Description: Cash shifts, acceptance documents, pay-in/out types, payouts.
// Purpose: Wrap `/v2/cashshifts/*`, `/v2/payrolls/list` and payout endpoints.
// Dependencies: crate::transport, time
// ============================================================================

//! ## Overview
//! Cash shift reads are keyed by the shift (session) id. Acceptance
//! documents are fetched by id, edited and posted back through [`CashShiftsApi::save`];
//! the server reports the import outcome in the returned save result rather
//! than through the HTTP status.

use time::Date;

use crate::api::path_id;
use crate::error::ClientError;
use crate::models::CashShiftPaymentsDto;
use crate::models::CashShiftSaveResultDto;
use crate::models::CashShiftSessionDto;
use crate::models::CashShiftStatus;
use crate::models::ClosedSessionDocumentDto;
use crate::models::PayInOutTypeDto;
use crate::models::PayOutResultDto;
use crate::models::PayOutSettingsDto;
use crate::models::PayrollDto;
use crate::query::QueryParams;
use crate::transport::HttpTransport;
use crate::transport::Request;

/// Cash shift endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CashShiftsApi<'a> {
    /// Shared transport.
    transport: &'a HttpTransport,
}

impl<'a> CashShiftsApi<'a> {
    /// Binds the API to a transport.
    #[must_use]
    pub const fn new(transport: &'a HttpTransport) -> Self {
        Self {
            transport,
        }
    }

    /// Lists shifts opened within `[open_date_from, open_date_to]`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn list(
        &self,
        open_date_from: Date,
        open_date_to: Date,
        status: CashShiftStatus,
    ) -> Result<Vec<CashShiftSessionDto>, ClientError> {
        let query = QueryParams::new()
            .date("openDateFrom", open_date_from)
            .date("openDateTo", open_date_to)
            .text("status", status.as_str());
        self.transport.send_json(Request::get("v2/cashshifts/list", query)).await
    }

    /// Fetches one shift.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn by_id(&self, session_id: &str) -> Result<CashShiftSessionDto, ClientError> {
        let path = format!("v2/cashshifts/byId/{}", path_id(session_id)?);
        self.transport.send_json(Request::get(&path, QueryParams::new())).await
    }

    /// Fetches payments, pay-ins and payouts of a shift.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn payments(
        &self,
        session_id: &str,
        hide_accepted: bool,
    ) -> Result<CashShiftPaymentsDto, ClientError> {
        let path = format!("v2/cashshifts/payments/list/{}", path_id(session_id)?);
        let query = QueryParams::new().flag("hideAccepted", hide_accepted);
        self.transport.send_json(Request::get(&path, query)).await
    }

    /// Fetches the acceptance document of a closed shift.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn closed_session_document(
        &self,
        id: &str,
    ) -> Result<ClosedSessionDocumentDto, ClientError> {
        let path = format!("v2/cashshifts/closedSessionDocument/{}", path_id(id)?);
        self.transport.send_json(Request::get(&path, QueryParams::new())).await
    }

    /// Submits an acceptance document.
    ///
    /// The import outcome is reported in the result body; an `ERROR` import
    /// is not a client error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn save(
        &self,
        document: &ClosedSessionDocumentDto,
    ) -> Result<CashShiftSaveResultDto, ClientError> {
        let body = HttpTransport::json_body(document)?;
        self.transport.send_json(Request::post("v2/cashshifts/save", body)).await
    }

    /// Lists pay-in/out types.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn pay_in_out_types(
        &self,
        include_deleted: bool,
        revision_from: i64,
    ) -> Result<Vec<PayInOutTypeDto>, ClientError> {
        let query = QueryParams::new()
            .flag("includeDeleted", include_deleted)
            .int("revisionFrom", revision_from);
        self.transport.send_json(Request::get("v2/entities/payInOutTypes/list", query)).await
    }

    /// Lists payroll statements of a department.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn payrolls(
        &self,
        date_from: Date,
        date_to: Date,
        department: &str,
        include_deleted: bool,
    ) -> Result<Vec<PayrollDto>, ClientError> {
        let query = QueryParams::new()
            .date("dateFrom", date_from)
            .date("dateTo", date_to)
            .text("department", department)
            .flag("includeDeleted", include_deleted);
        self.transport.send_json(Request::get("v2/payrolls/list", query)).await
    }

    /// Executes a payout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the call fails or the payload is invalid.
    pub async fn add_pay_out(
        &self,
        settings: &PayOutSettingsDto,
    ) -> Result<PayOutResultDto, ClientError> {
        let body = HttpTransport::json_body(settings)?;
        self.transport.send_json(Request::post("v2/payInOuts/addPayOut", body)).await
    }
}
