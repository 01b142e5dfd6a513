// crates/iiko-client/src/models/cash_shifts.rs
// ============================================================================
// Module: Cash Shift Models
// Description: Cash shifts, their payments, acceptance documents and payouts.
// Purpose: Decode cash-shift endpoints and build save/payout payloads.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! Acceptance documents are read, edited and posted back. Fields the client
//! does not model are kept in `extra` so a resubmitted document carries
//! everything the server sent.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use time::Date;
use time::PrimitiveDateTime;

use crate::models::envelope::ResultStatus;
use crate::models::envelope::render_errors;

/// Pay-in/out transaction type for payouts.
pub const TRANSACTION_TYPE_PAYOUT: &str = "PAYOUT";

// ============================================================================
// SECTION: Shifts
// ============================================================================

/// Shift status filter for `/v2/cashshifts/list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CashShiftStatus {
    /// Every shift.
    Any,
    /// Open shifts.
    Open,
    /// Closed shifts.
    Closed,
    /// Accepted shifts.
    Accepted,
    /// Closed but not accepted.
    Unaccepted,
    /// Shifts with warnings.
    HasWarnings,
}

impl CashShiftStatus {
    /// Returns the query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Accepted => "ACCEPTED",
            Self::Unaccepted => "UNACCEPTED",
            Self::HasWarnings => "HASWARNINGS",
        }
    }
}

/// Cash shift summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashShiftSessionDto {
    /// Shift identifier.
    pub id: String,
    /// Sequential shift number.
    pub session_number: i64,
    /// Fiscal register shift number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_number: Option<i64>,
    /// Cash register number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_reg_number: Option<i64>,
    /// Opening time.
    #[serde(default, with = "crate::models::serde_opt_date_time")]
    pub open_date: Option<PrimitiveDateTime>,
    /// Closing time, absent while open.
    #[serde(default, with = "crate::models::serde_opt_date_time")]
    pub close_date: Option<PrimitiveDateTime>,
    /// Acceptance time.
    #[serde(default, with = "crate::models::serde_opt_date_time")]
    pub accept_date: Option<PrimitiveDateTime>,
    /// Shift manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    /// Cash on hand at opening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_start_cash: Option<f64>,
    /// Cash sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_cash: Option<f64>,
    /// Card sales.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_card: Option<f64>,
    /// Pay-ins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_in: Option<f64>,
    /// Payouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_out: Option<f64>,
    /// Server-side status label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_status: Option<String>,
    /// Point of sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_sale_id: Option<String>,
}

/// Payments, pay-ins and payouts recorded during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashShiftPaymentsDto {
    /// Shift identifier.
    pub session_id: String,
    /// Cashless payments.
    #[serde(default)]
    pub cashless_records: Vec<Value>,
    /// Pay-ins.
    #[serde(default)]
    pub pay_in_records: Vec<Value>,
    /// Payouts.
    #[serde(default)]
    pub pay_outs_records: Vec<Value>,
}

// ============================================================================
// SECTION: Acceptance
// ============================================================================

/// Shift acceptance document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedSessionDocumentDto {
    /// Document identifier.
    pub id: String,
    /// Shift identifier.
    pub session: String,
    /// Shortage account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_shortage_id: Option<String>,
    /// Shortage counteragent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counteragent_shortage_id: Option<String>,
    /// Surplus account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_surplus_id: Option<String>,
    /// Surplus counteragent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counteragent_surplus_id: Option<String>,
    /// Department.
    pub department_id: String,
    /// Document lines.
    #[serde(default)]
    pub items: Vec<ClosedSessionDocumentItemDto>,
    /// Fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acceptance document line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosedSessionDocumentItemDto {
    /// Free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `/v2/cashshifts/save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashShiftSaveResultDto {
    /// Import outcome.
    pub import_result: ResultStatus,
    /// Errors reported on `ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
    /// Stored document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<ClosedSessionDocumentDto>,
    /// Shift status after import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CashShiftSaveResultDto {
    /// Renders the error entries as display strings.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        render_errors(self.errors.as_deref())
    }
}

// ============================================================================
// SECTION: Pay-ins, Payouts, Payrolls
// ============================================================================

/// Pay-in/out type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInOutTypeDto {
    /// Type identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Counteragent kind required by the type.
    pub counteragent_type: String,
    /// `PAYIN` or `PAYOUT`.
    pub transaction_type: String,
    /// Deletion flag.
    pub is_deleted: bool,
}

impl PayInOutTypeDto {
    /// Returns true for live payout types.
    #[must_use]
    pub fn is_active_payout(&self) -> bool {
        self.transaction_type == TRANSACTION_TYPE_PAYOUT && !self.is_deleted
    }
}

/// Payroll statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDto {
    /// Payroll identifier.
    pub id: String,
    /// Period start.
    #[serde(with = "crate::models::serde_date")]
    pub date_from: Date,
    /// Period end.
    #[serde(with = "crate::models::serde_date")]
    pub date_to: Date,
    /// Department.
    pub department: String,
    /// Processing status.
    pub status: String,
}

/// Payout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayOutSettingsDto {
    /// Payout type.
    pub pay_out_type_id: String,
    /// Payout date.
    #[serde(with = "crate::models::serde_date")]
    pub pay_out_date: Date,
    /// Counteragent, when the type requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counteragent: Option<String>,
    /// Amount per department.
    pub department_sum_map: BTreeMap<String, f64>,
    /// Payroll the payout settles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payroll_id: Option<String>,
    /// Free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Result of `/v2/payInOuts/addPayOut`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayOutResultDto {
    /// Outcome.
    pub result: ResultStatus,
    /// Errors reported on `ERROR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
    /// Applied settings on `SUCCESS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_out_settings: Option<PayOutSettingsDto>,
}

impl PayOutResultDto {
    /// Renders the error entries as display strings.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        render_errors(self.errors.as_deref())
    }
}
