// crates/iiko-client/src/models/price_periods.rs
// ============================================================================
// Module: Price Period Models
// Description: Period schedules used to time-limit prices.
// Purpose: Decode `/v2/entities/periodSchedules*` payloads.
// Dependencies: serde
// ============================================================================

//! Period schedules: named sets of `HH:MM` intervals on week days 1..=7.

use serde::Deserialize;
use serde::Serialize;

/// Named set of weekly time windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodScheduleDto {
    /// Schedule identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Deletion flag.
    pub deleted: bool,
    /// Time windows.
    #[serde(default)]
    pub periods: Vec<PeriodScheduleItemDto>,
}

/// One time window. Times are `HH:MM`; days run 1 (Monday) to 7 (Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodScheduleItemDto {
    /// Window start.
    pub begin: String,
    /// Window end.
    pub end: String,
    /// Days the window applies to.
    #[serde(default)]
    pub days_of_week: Vec<i64>,
}
