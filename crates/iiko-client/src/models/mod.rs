// crates/iiko-client/src/models/mod.rs
// ============================================================================
// Module: Data Transfer Objects
// Description: Wire models for iiko back-office endpoints.
// Purpose: Provide typed request and response payloads with strict enums.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! DTOs mirror the server's camelCase JSON. Enumerations are closed: an
//! unknown enum value fails decoding instead of being silently accepted.
//! Dates travel as `YYYY-MM-DD`; timestamps as ISO-8601 local date-times.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod accounts;
pub mod cash_shifts;
pub mod envelope;
pub mod menu_change;
pub mod nomenclature;
pub mod price_categories;
pub mod price_periods;
pub mod quick_menus;
pub mod replication;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use accounts::AccountDto;
pub use accounts::AccountType;
pub use cash_shifts::CashShiftPaymentsDto;
pub use cash_shifts::CashShiftSaveResultDto;
pub use cash_shifts::CashShiftSessionDto;
pub use cash_shifts::CashShiftStatus;
pub use cash_shifts::ClosedSessionDocumentDto;
pub use cash_shifts::ClosedSessionDocumentItemDto;
pub use cash_shifts::PayInOutTypeDto;
pub use cash_shifts::PayOutResultDto;
pub use cash_shifts::PayOutSettingsDto;
pub use cash_shifts::PayrollDto;
pub use envelope::Envelope;
pub use envelope::ResultStatus;
pub use menu_change::MenuChangeDocumentDto;
pub use menu_change::MenuChangeDocumentItemDto;
pub use menu_change::MenuChangeDocumentStatus;
pub use menu_change::ProductPriceDto;
pub use menu_change::ProductPriceItemDto;
pub use nomenclature::ProductDto;
pub use price_categories::ClientPriceCategoryDto;
pub use price_categories::PricingStrategyDto;
pub use price_categories::PricingStrategyType;
pub use price_periods::PeriodScheduleDto;
pub use price_periods::PeriodScheduleItemDto;
pub use quick_menus::QuickLabelCreateDto;
pub use quick_menus::QuickLabelDto;
pub use quick_menus::QuickLabelEntityType;
pub use quick_menus::QuickMenuCreateDto;
pub use quick_menus::QuickMenuDeleteDto;
pub use quick_menus::QuickMenuDto;
pub use quick_menus::QuickMenuFilterForm;
pub use quick_menus::QuickMenuUpdateDto;
pub use replication::ReplicationStatusDto;
pub use replication::ReplicationStatusesDto;
pub use replication::ServerType;

// ============================================================================
// SECTION: Date Helpers
// ============================================================================

use time::Date;
use time::OffsetDateTime;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Iso8601;
use time::macros::format_description;

/// Wire format for calendar dates.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
/// Wire format used when sending local timestamps.
const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Formats a local timestamp as `YYYY-MM-DDTHH:MM:SS`.
///
/// # Errors
///
/// Returns the formatting error reported by `time`.
pub fn format_date_time(value: PrimitiveDateTime) -> Result<String, time::error::Format> {
    value.format(DATE_TIME_FORMAT)
}

/// Parses a `YYYY-MM-DD` date, ignoring any trailing time component.
///
/// # Errors
///
/// Returns the parse error when the leading date is malformed.
pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    Date::parse(date_part, DATE_FORMAT)
}

/// Parses an ISO-8601 timestamp into server-local date-time.
///
/// Offsets, when present, are dropped: the server reports local wall-clock
/// time and callers compare against other server-local values.
///
/// # Errors
///
/// Returns the parse error when neither the local nor the offset form match.
pub fn parse_date_time(raw: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).or_else(|local_err| {
        OffsetDateTime::parse(raw, &Iso8601::DEFAULT)
            .map(|value| PrimitiveDateTime::new(value.date(), value.time()))
            .map_err(|_| local_err)
    })
}

/// Serde adapter for required `YYYY-MM-DD` dates.
pub mod serde_date {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;
    use time::Date;

    /// Serializes a date.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*value))
    }

    /// Deserializes a date.
    ///
    /// # Errors
    ///
    /// Fails on malformed dates.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(D::Error::custom)
    }
}

/// Serde adapter for optional `YYYY-MM-DD` dates.
pub mod serde_opt_date {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;
    use time::Date;

    /// Serializes an optional date.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        value: &Option<Date>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&super::format_date(*date)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional date.
    ///
    /// # Errors
    ///
    /// Fails on malformed dates.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_date(&raw).map_err(D::Error::custom))
            .transpose()
    }
}

/// Serde adapter for optional ISO-8601 timestamps.
pub mod serde_opt_date_time {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use serde::de::Error;
    use time::PrimitiveDateTime;

    /// Serializes an optional timestamp.
    ///
    /// # Errors
    ///
    /// Propagates formatting and serializer errors.
    pub fn serialize<S: Serializer>(
        value: &Option<PrimitiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => {
                let text =
                    super::format_date_time(*value).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp.
    ///
    /// # Errors
    ///
    /// Fails on malformed timestamps.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<PrimitiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_date_time(&raw).map_err(D::Error::custom))
            .transpose()
    }
}
