// system-tests/tests/helpers/live.rs
// ============================================================================
// Module: Live Suite Helpers
// Description: Date windows and tolerance sets for live iiko suites.
// Purpose: Keep per-suite query windows and tolerated kinds consistent.
// Dependencies: iiko-client, system-tests, time
// ============================================================================

use iiko_client::ErrorKind;
use system_tests::Tolerate;
use time::Date;
use time::Duration;
use time::OffsetDateTime;

/// Error type returned by live suites.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Payout creation may be refused by rights. Validation refusals come back
/// as an `ERROR` payout result, not as an error.
pub const PAYOUT_REFUSALS: Tolerate = Tolerate::kinds(
    &[ErrorKind::PermissionDenied],
    "payout creation depends on user rights",
);

/// Menu change creation may be refused by rights or by server-side validation.
pub const MENU_CHANGE_REFUSALS: Tolerate = Tolerate::kinds(
    &[ErrorKind::PermissionDenied, ErrorKind::Rejected],
    "menu change creation depends on user rights and document numbering",
);

/// Department replication status is absent for departments never replicated.
pub const DEPARTMENT_STATUS_ABSENT: Tolerate =
    Tolerate::kinds(&[ErrorKind::NotFound], "department has no replication record");

/// Replication listing only applies to chain servers.
pub const CHAIN_ONLY: Tolerate =
    Tolerate::kinds(&[ErrorKind::NotApplicable], "server is not a chain server");

/// Returns today's UTC date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Returns the date `days` before today.
pub fn days_ago(days: i64) -> Date {
    today().saturating_sub(Duration::days(days))
}

/// Returns the date `days` after today.
pub fn days_ahead(days: i64) -> Date {
    today().saturating_add(Duration::days(days))
}
