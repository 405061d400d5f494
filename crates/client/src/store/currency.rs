//! Active sales-area store.
//!
//! Per-area pricing/SKU sets are not comparable across areas: a cart built
//! under one area's pricing is invalid under another's and must not be
//! silently re-priced. Switching the area is therefore the single trigger
//! that clears the cart.

use serde::{Deserialize, Serialize};

use repairhub_core::SalesArea;

use super::cart::CartStore;

/// Holds the active sales area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStore {
    sales_area: SalesArea,
}

impl CurrencyStore {
    /// Persistence key for this store.
    pub const STORE_NAME: &'static str = "currency";

    /// Create a store with the default sales area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active sales area.
    #[must_use]
    pub const fn sales_area(self) -> SalesArea {
        self.sales_area
    }

    /// Currency symbol of the active sales area.
    #[must_use]
    pub const fn currency_symbol(self) -> &'static str {
        self.sales_area.currency_symbol()
    }

    /// Switch the active sales area.
    ///
    /// Changing to a different area clears the cart completely, then commits
    /// the new area. Setting the already-active area is a no-op and leaves
    /// the cart untouched.
    pub fn set_sales_area(&mut self, new_area: SalesArea, cart: &mut CartStore) {
        if self.sales_area == new_area {
            return;
        }
        tracing::info!(
            from = self.sales_area.as_i32(),
            to = new_area.as_i32(),
            cleared_items = cart.items().len(),
            "sales area changed, cart invalidated"
        );
        cart.clear();
        self.sales_area = new_area;
    }
}
