//! Typed wrappers for the backend endpoints.
//!
//! Thin pass-throughs over the [`crate::gateway::Gateway`]: no client-side
//! business logic beyond envelope handling. Endpoints whose payloads the
//! backend does not give a stable shape cross as `serde_json::Value`.

pub mod shop;
pub mod user;
