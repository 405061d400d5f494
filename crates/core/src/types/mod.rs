//! Core type definitions.
//!
//! All types here are plain data: serde-serializable wire shapes plus a few
//! pure derived lookups (currency symbols, price parsing). Anything that
//! talks to the network lives in the client crate.

mod envelope;
mod id;
mod order;
mod part;
mod sales_area;
mod user;

pub use envelope::{Envelope, EnvelopeError, SUCCESS_CODE};
pub use id::*;
pub use order::{CompletedOrder, CustomerShipInfo, OrderItemDetail};
pub use part::{PartDetail, PartInfo, ShopPart};
pub use sales_area::SalesArea;
pub use user::{SUPER_ADMIN_USER_TYPE, UserInfo};
