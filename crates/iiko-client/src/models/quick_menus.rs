// crates/iiko-client/src/models/quick_menus.rs
// ============================================================================
// Module: Quick Menu Models
// Description: Cashier quick menus and their label grid.
// Purpose: Decode and build `/v2/entities/quickLabels/*` payloads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A quick menu has three pages; each page is a 3 x 8 grid of labels
//! (`x` in 0..=2, `y` in 0..=7). Week-day dependent menus tag labels with a
//! `day`. Coordinates are decoded as plain integers so out-of-range values
//! surface in shape checks instead of decode failures.

use serde::Deserialize;
use serde::Serialize;

use crate::query::QueryParams;

/// Number of pages in a quick menu.
pub const QUICK_MENU_PAGES: usize = 3;
/// Grid columns per page.
pub const QUICK_MENU_COLUMNS: i64 = 3;
/// Grid rows per page.
pub const QUICK_MENU_ROWS: i64 = 8;

/// Entity referenced by a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuickLabelEntityType {
    /// Single product.
    Product,
    /// Product group.
    ProductGroup,
}

/// Label placed on a quick menu page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLabelDto {
    /// Week day for week-day dependent menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    /// Page index.
    pub page: i64,
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Referenced entity.
    pub entity_id: String,
    /// Referenced entity kind.
    pub entity_type: QuickLabelEntityType,
}

/// Quick menu bound to a department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMenuDto {
    /// Menu identifier.
    pub id: String,
    /// Deletion flag.
    pub deleted: bool,
    /// Labels vary by week day.
    pub depends_on_week_day: bool,
    /// Owning department.
    pub department_id: String,
    /// Restaurant section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Page titles.
    #[serde(default)]
    pub page_names: Vec<String>,
    /// Placed labels.
    #[serde(default)]
    pub labels: Vec<QuickLabelDto>,
}

/// Label in a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLabelCreateDto {
    /// Week day for week-day dependent menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    /// Page index.
    pub page: i64,
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
    /// Referenced product or group.
    pub entity_id: String,
}

/// Quick menu creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMenuCreateDto {
    /// Labels vary by week day.
    pub depends_on_week_day: bool,
    /// Owning department.
    pub department_id: String,
    /// Restaurant section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Page titles.
    pub page_names: Vec<String>,
    /// Labels to place.
    pub labels: Vec<QuickLabelCreateDto>,
}

/// Quick menu replacement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMenuUpdateDto {
    /// Menu to replace.
    pub id: String,
    /// Labels vary by week day.
    pub depends_on_week_day: bool,
    /// Owning department.
    pub department_id: String,
    /// Restaurant section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Page titles.
    pub page_names: Vec<String>,
    /// Labels replacing the current grid.
    pub labels: Vec<QuickLabelCreateDto>,
}

/// Quick menu deletion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMenuDeleteDto {
    /// Menu to delete.
    pub id: String,
}

/// Form filter for `POST /v2/entities/quickLabels/list`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuickMenuFilterForm {
    /// Include deleted menus.
    pub include_deleted: bool,
    /// Restrict to these departments; empty means all.
    pub department_ids: Vec<String>,
}

impl QuickMenuFilterForm {
    /// Encodes the filter as form parameters.
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .flag("includeDeleted", self.include_deleted)
            .repeated("departmentId", &self.department_ids)
    }
}
