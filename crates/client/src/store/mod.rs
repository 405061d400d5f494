//! Client-side stores.
//!
//! Each store is an explicit context object owned by the embedder; nothing
//! here is a process-wide singleton. State survives across sessions through
//! [`persist`], keyed by store name.

mod cart;
mod currency;
pub mod persist;

pub use cart::{CartItem, CartStore};
pub use currency::CurrencyStore;
