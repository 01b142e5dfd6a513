// crates/iiko-client/src/api/mod.rs
// ============================================================================
// Module: Domain Endpoint Groups
// Description: Thin typed wrappers over iiko back-office endpoints.
// Purpose: Map one method to one request/response exchange.
// Dependencies: crate::transport, crate::models
// ============================================================================

//! ## Overview
//! Each group borrows the shared [`HttpTransport`](crate::transport::HttpTransport)
//! and requires an open session. Methods return either the bare payload or
//! the [`Envelope`](crate::models::Envelope) the endpoint wraps it in; callers
//! inspect `result` and `revision` themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::ClientError;

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod accounts;
pub mod cash_shifts;
pub mod fast_menu;
pub mod menu_change;
pub mod nomenclature;
pub mod price_categories;
pub mod price_periods;
pub mod replications;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use accounts::AccountsApi;
pub use cash_shifts::CashShiftsApi;
pub use fast_menu::FastMenuApi;
pub use menu_change::MenuChangeApi;
pub use menu_change::MenuChangeQuery;
pub use menu_change::PriceQuery;
pub use nomenclature::NomenclatureApi;
pub use price_categories::PriceCategoriesApi;
pub use price_periods::PricePeriodsApi;
pub use replications::ReplicationsApi;

/// Revision watermark requesting every record.
pub const REVISION_ALL: i64 = -1;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates an identifier interpolated into an endpoint path.
///
/// # Errors
///
/// Returns [`ClientError::Config`] when the identifier is empty or holds
/// characters outside `[A-Za-z0-9._-]`.
pub(crate) fn path_id(raw: &str) -> Result<&str, ClientError> {
    let valid = !raw.is_empty()
        && raw.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        && raw != "."
        && raw != "..";
    if valid {
        Ok(raw)
    } else {
        Err(ClientError::Config(format!("invalid path identifier: '{raw}'")))
    }
}
