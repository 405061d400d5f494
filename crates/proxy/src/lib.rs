//! Repairhub image proxy.
//!
//! Re-serves a remote image's bytes and content type so the storefront can
//! display images from hosts that refuse hotlinking or lack CORS headers.
//! One route, no state beyond a shared HTTP client:
//!
//! - `GET /image-proxy?url=...` - 400 when `url` is missing, upstream status
//!   propagated on fetch failure, otherwise the image bytes with the
//!   upstream `Content-Type`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
mod routes;

pub use routes::{AppState, router};
