//! Catalog part types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{PartDetailId, PartId};
use super::sales_area::SalesArea;

/// Per-area price/SKU record for a part.
///
/// Prices cross the wire as strings; use [`PartDetail::price_decimal`] for
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDetail {
    pub id: PartDetailId,
    pub part_id: PartId,
    pub sales_area: SalesArea,
    pub sku: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl PartDetail {
    /// Parse the wire price for arithmetic. An absent or unparseable price
    /// counts as zero.
    #[must_use]
    pub fn price_decimal(&self) -> Decimal {
        Decimal::from_str(&self.price).unwrap_or_default()
    }
}

/// A replacement part in the catalog.
///
/// The display fields (name, image, description, compatibility) are opaque to
/// cart logic; only `id` and the detail list participate in any invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartInfo {
    pub id: PartId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub compatibility: String,
    #[serde(default)]
    pub shop_part_details_list: Vec<PartDetail>,
}

/// A cart line as sent to checkout/availability endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopPart {
    pub num: u32,
    pub part_id: PartId,
    pub sku: String,
    pub price: String,
}
