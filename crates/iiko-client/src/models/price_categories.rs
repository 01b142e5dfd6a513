// crates/iiko-client/src/models/price_categories.rs
// ============================================================================
// Module: Price Category Models
// Description: Client price categories and their pricing strategies.
// Purpose: Decode `/v2/entities/priceCategories*` payloads.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A price category carries one pricing strategy. The strategy type decides
//! which value is meaningful: `delta` for absolute strategies, `percent` for
//! percentage ones.

use serde::Deserialize;
use serde::Serialize;

/// Pricing strategy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingStrategyType {
    /// Fixed delta from the base price.
    AbsoluteValue,
    /// Percentage of the base price.
    Percent,
}

/// Pricing strategy. `delta` accompanies `ABSOLUTE_VALUE`, `percent`
/// accompanies `PERCENT`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingStrategyDto {
    /// Strategy kind.
    #[serde(rename = "type")]
    pub strategy_type: PricingStrategyType,
    /// Absolute delta.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    /// Percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

impl PricingStrategyDto {
    /// Returns true when the field matching the strategy kind is present.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        match self.strategy_type {
            PricingStrategyType::AbsoluteValue => self.delta.is_some(),
            PricingStrategyType::Percent => self.percent.is_some(),
        }
    }
}

/// Client price category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPriceCategoryDto {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Deletion flag.
    pub deleted: bool,
    /// Category code.
    pub code: String,
    /// Cashiers may assign the category by hand.
    pub assignable_manually: bool,
    /// Pricing rule.
    pub pricing_strategy: PricingStrategyDto,
}
