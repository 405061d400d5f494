//! Shopping cart store.
//!
//! Line items are keyed by part id: adding a part that is already present
//! merges into its quantity instead of duplicating the line. Quantity never
//! observably reaches zero; decrementing at one is a no-op and removal is a
//! distinct, explicit operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use repairhub_core::{PartId, PartInfo};

/// One cart line: a catalog part plus the quantity in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub part: PartInfo,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: quantity times the first listed price record,
    /// treating an absent or unparseable price as zero.
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        let unit = self
            .part
            .shop_part_details_list
            .first()
            .map(repairhub_core::PartDetail::price_decimal)
            .unwrap_or_default();
        unit * Decimal::from(self.quantity)
    }
}

/// Shopping cart contents and derived totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    /// Persistence key for this store.
    pub const STORE_NAME: &'static str = "cart";

    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line items.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add a part: merge into an existing line (quantity + 1) or insert a
    /// new line with quantity 1.
    pub fn add_item(&mut self, part: PartInfo) {
        match self.items.iter_mut().find(|item| item.part.id == part.id) {
            Some(existing) => existing.quantity += 1,
            None => self.items.push(CartItem { part, quantity: 1 }),
        }
    }

    /// Remove a line entirely. Removal is always explicit; no quantity
    /// operation does this as a side effect.
    pub fn remove_item(&mut self, id: PartId) {
        self.items.retain(|item| item.part.id != id);
    }

    /// Increase a line's quantity by one. No-op if the part is absent.
    pub fn increment_quantity(&mut self, id: PartId) {
        if let Some(item) = self.find_mut(id) {
            item.quantity += 1;
        }
    }

    /// Decrease a line's quantity by one, floored at 1. Never removes the
    /// line. No-op if the part is absent.
    pub fn decrement_quantity(&mut self, id: PartId) {
        if let Some(item) = self.find_mut(id) {
            if item.quantity > 1 {
                item.quantity -= 1;
            }
        }
    }

    /// Overwrite a line's quantity (floored at 1). No-op if the part is
    /// absent.
    pub fn set_quantity(&mut self, id: PartId, quantity: u32) {
        if let Some(item) = self.find_mut(id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Overwrite the price record matching (part id, SKU). Used to
    /// reconcile server-confirmed pricing after a catalog change. No-op if
    /// no line matches.
    pub fn update_item_price(&mut self, part_id: PartId, sku: &str, new_price: &str) {
        if let Some(item) = self.find_mut(part_id) {
            if let Some(detail) = item
                .part
                .shop_part_details_list
                .iter_mut()
                .find(|d| d.sku == sku)
            {
                detail.price = new_price.to_string();
            }
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line prices (first listed price record per line).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_price).sum()
    }

    fn find_mut(&mut self, id: PartId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.part.id == id)
    }
}
