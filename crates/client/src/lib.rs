//! Repairhub client SDK.
//!
//! This crate talks to the self-repair shop backend and carries the
//! client-side state the storefront UI renders from:
//!
//! - [`gateway`] - HTTP request gateway: bearer-token injection, envelope
//!   decoding, forced logout on 401
//! - [`session`] - the authenticated user's profile and token
//! - [`store`] - cart and sales-area stores with JSON persistence
//! - [`permission`] - pure authorization predicate over session grants
//! - [`api`] - typed wrappers for the shop and auth endpoints
//!
//! Stores are explicit context objects, not process-wide singletons; tests
//! (and embedders) instantiate isolated instances and pass them where they
//! are needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod gateway;
pub mod permission;
pub mod session;
pub mod store;

pub use config::{ClientConfig, ConfigError};
pub use gateway::{Gateway, GatewayError};
pub use session::SessionStore;
pub use store::{CartItem, CartStore, CurrencyStore};
