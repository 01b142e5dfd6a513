// crates/iiko-client/src/models/menu_change.rs
// ============================================================================
// Module: Menu Change Models
// Description: Menu change documents and the product prices they set.
// Purpose: Decode `/v2/documents/menuChange*` and `/v2/price` payloads.
// Dependencies: serde, serde_json, time
// ============================================================================

//! ## Overview
//! A menu change document sets prices for products per department from its
//! incoming date. Product prices are reported as intervals, each pointing
//! back at the document that set it.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use time::Date;

/// Menu change document status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MenuChangeDocumentStatus {
    /// Draft.
    New,
    /// Applied.
    Processed,
    /// Deleted.
    Deleted,
}

impl MenuChangeDocumentStatus {
    /// Returns the query value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Processed => "PROCESSED",
            Self::Deleted => "DELETED",
        }
    }
}

/// Menu change document. `id` is absent on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChangeDocumentDto {
    /// Document identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Effective date.
    #[serde(with = "crate::models::serde_date")]
    pub date_incoming: Date,
    /// Document number.
    pub document_number: String,
    /// Status.
    pub status: MenuChangeDocumentStatus,
    /// Free-form comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Short display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Replace the previous menu instead of amending it.
    pub delete_previous_menu: bool,
    /// Last effective date.
    #[serde(
        default,
        with = "crate::models::serde_opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_to: Option<Date>,
    /// Price lines.
    #[serde(default)]
    pub items: Vec<MenuChangeDocumentItemDto>,
}

/// Menu change document line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChangeDocumentItemDto {
    /// Product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// Department.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    /// Price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Included in the menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub including: Option<bool>,
    /// Fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Prices of one product in one department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceDto {
    /// Department.
    pub department_id: String,
    /// Product.
    pub product_id: String,
    /// Size variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_size_id: Option<String>,
    /// Price intervals.
    #[serde(default)]
    pub prices: Vec<ProductPriceItemDto>,
}

/// Price interval set by a menu change document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceItemDto {
    /// Interval start.
    #[serde(with = "crate::models::serde_date")]
    pub date_from: Date,
    /// Interval end.
    #[serde(with = "crate::models::serde_date")]
    pub date_to: Date,
    /// Source document.
    pub document_id: String,
    /// Included in the menu.
    pub included: bool,
    /// Dish of the day.
    pub dish_of_day: bool,
    /// Flyer program participant.
    pub flyer_program: bool,
    /// Price, absent for excluded items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}
