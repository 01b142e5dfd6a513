// system-tests/src/shape.rs
// ============================================================================
// Module: Response Shape Checks
// Description: Field-domain validators for decoded iiko payloads.
// Purpose: Assert invariants the type system does not already enforce.
// Dependencies: iiko-client, regex
// ============================================================================

//! ## Overview
//! Decoding already rejects unknown enum values and missing required fields.
//! These checks cover the remaining domains: fixed root types, `HH:MM` period
//! bounds, weekday numbers, quick-menu grid coordinates, pricing strategy
//! consistency and list counts across `includeDeleted`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use iiko_client::models::AccountDto;
use iiko_client::models::AccountType;
use iiko_client::models::CashShiftSaveResultDto;
use iiko_client::models::ClientPriceCategoryDto;
use iiko_client::models::PeriodScheduleDto;
use iiko_client::models::QuickMenuDto;
use iiko_client::models::ResultStatus;
use iiko_client::models::accounts::ACCOUNT_ROOT_TYPE;
use iiko_client::models::quick_menus::QUICK_MENU_COLUMNS;
use iiko_client::models::quick_menus::QUICK_MENU_PAGES;
use iiko_client::models::quick_menus::QUICK_MENU_ROWS;
use regex::Regex;
use thiserror::Error;

use crate::harness::CaseFailure;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// A payload field outside its allowed domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{entity} {id}: {detail}")]
pub struct ShapeViolation {
    /// Entity kind.
    pub entity: &'static str,
    /// Entity identifier.
    pub id: String,
    /// What was wrong.
    pub detail: String,
}

impl ShapeViolation {
    /// Builds a violation.
    fn new(entity: &'static str, id: &str, detail: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.to_string(),
            detail: detail.into(),
        }
    }
}

impl From<ShapeViolation> for CaseFailure {
    fn from(violation: ShapeViolation) -> Self {
        Self::new("shape", violation.to_string())
    }
}

// ============================================================================
// SECTION: Checks
// ============================================================================

/// Matches `HH:MM` period bounds.
static TIME_OF_DAY: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").ok());

/// Returns true when `value` looks like `HH:MM`.
#[must_use]
pub fn is_time_of_day(value: &str) -> bool {
    TIME_OF_DAY.as_ref().is_some_and(|pattern| pattern.is_match(value))
}

/// Checks an account's root type and type domain.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_account(account: &AccountDto) -> Result<(), ShapeViolation> {
    if account.root_type != ACCOUNT_ROOT_TYPE {
        return Err(ShapeViolation::new(
            "account",
            &account.id,
            format!("rootType is '{}'", account.root_type),
        ));
    }
    if !AccountType::ALL.contains(&account.account_type) {
        return Err(ShapeViolation::new("account", &account.id, "unknown account type"));
    }
    Ok(())
}

/// Checks period bounds and weekday numbers of a schedule.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_period_schedule(schedule: &PeriodScheduleDto) -> Result<(), ShapeViolation> {
    for period in &schedule.periods {
        for bound in [&period.begin, &period.end] {
            if !is_time_of_day(bound) {
                return Err(ShapeViolation::new(
                    "period schedule",
                    &schedule.id,
                    format!("period bound '{bound}' is not HH:MM"),
                ));
            }
        }
        if let Some(day) = period.days_of_week.iter().find(|day| !(1 ..= 7).contains(*day)) {
            return Err(ShapeViolation::new(
                "period schedule",
                &schedule.id,
                format!("day of week {day} is outside 1..=7"),
            ));
        }
    }
    Ok(())
}

/// Checks page names and label grid coordinates of a quick menu.
///
/// # Errors
///
/// Returns the first violation found.
pub fn check_quick_menu(menu: &QuickMenuDto) -> Result<(), ShapeViolation> {
    if menu.page_names.len() != QUICK_MENU_PAGES {
        return Err(ShapeViolation::new(
            "quick menu",
            &menu.id,
            format!("expected {QUICK_MENU_PAGES} page names, got {}", menu.page_names.len()),
        ));
    }
    let pages = i64::try_from(QUICK_MENU_PAGES).unwrap_or(i64::MAX);
    for label in &menu.labels {
        let in_grid = (0 .. pages).contains(&label.page)
            && (0 .. QUICK_MENU_COLUMNS).contains(&label.x)
            && (0 .. QUICK_MENU_ROWS).contains(&label.y);
        if !in_grid {
            return Err(ShapeViolation::new(
                "quick menu",
                &menu.id,
                format!(
                    "label {} at page {} ({}, {}) is outside the grid",
                    label.entity_id, label.page, label.x, label.y
                ),
            ));
        }
    }
    Ok(())
}

/// Checks that a price category's strategy carries the value its type needs.
///
/// # Errors
///
/// Returns a violation when the strategy is inconsistent.
pub fn check_price_category(category: &ClientPriceCategoryDto) -> Result<(), ShapeViolation> {
    if category.pricing_strategy.is_consistent() {
        Ok(())
    } else {
        Err(ShapeViolation::new(
            "price category",
            &category.id,
            "pricing strategy lacks the value its type requires",
        ))
    }
}

/// Checks that a cash shift save result with `ERROR` reports its errors.
///
/// # Errors
///
/// Returns a violation when an `ERROR` result has no error entries.
pub fn check_save_result(result: &CashShiftSaveResultDto) -> Result<(), ShapeViolation> {
    if result.import_result == ResultStatus::Error && result.error_messages().is_empty() {
        return Err(ShapeViolation::new(
            "cash shift save",
            result.document.as_ref().map_or("-", |document| document.id.as_str()),
            "ERROR result without errors",
        ));
    }
    Ok(())
}

/// Checks that a list including deleted entries is at least as long as one
/// without them.
///
/// # Errors
///
/// Returns a violation when the counts are inverted.
pub fn check_superset(
    entity: &'static str,
    with_deleted: usize,
    without_deleted: usize,
) -> Result<(), ShapeViolation> {
    if with_deleted >= without_deleted {
        Ok(())
    } else {
        Err(ShapeViolation::new(
            entity,
            "list",
            format!(
                "{with_deleted} entries with deleted is fewer than {without_deleted} without"
            ),
        ))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
