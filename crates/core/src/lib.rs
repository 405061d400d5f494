//! Repairhub Core - Shared types library.
//!
//! This crate provides common types used across all Repairhub components:
//! - `client` - Client SDK for the self-repair shop backend
//! - `proxy` - Image proxy binary
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! backend payload crosses the wire inside the [`types::Envelope`] wrapper;
//! decoding it is an explicit step that returns a tagged result instead of
//! a side effect buried in a response hook.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, sales areas, the response envelope, and the
//!   catalog/order/user wire types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
