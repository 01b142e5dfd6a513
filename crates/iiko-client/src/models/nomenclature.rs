// crates/iiko-client/src/models/nomenclature.rs
// ============================================================================
// Module: Nomenclature Models
// Description: Product lookups.
// Purpose: Decode `/v2/entities/products/list` payloads.
// Dependencies: serde
// ============================================================================

//! Product entries.

use serde::Deserialize;
use serde::Serialize;

/// Product entry. Only the fields needed to reference a product are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Article number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<String>,
    /// Quick-dial code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Deletion flag.
    #[serde(default)]
    pub deleted: bool,
}
