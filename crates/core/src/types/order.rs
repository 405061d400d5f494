//! Completed-order wire types.
//!
//! Subset of the backend's order detail payload that the client actually
//! renders: line items, amounts, shipping/billing addresses. Amount fields
//! stay as wire strings; nothing client-side does arithmetic on them.

use serde::{Deserialize, Serialize};

use super::id::{OrderId, PartId, UserId};
use super::sales_area::SalesArea;

/// One fulfilled line of a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDetail {
    pub id: i32,
    pub order_id: OrderId,
    pub shop_part_id: PartId,
    pub sku: String,
    pub shop_part_name: String,
    #[serde(default)]
    pub shop_part_url: String,
    pub num: u32,
    #[serde(default)]
    pub reality_num: u32,
    pub sales_area: SalesArea,
    pub price: String,
    #[serde(default)]
    pub is_refund: i32,
}

/// Shipping or billing address attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerShipInfo {
    pub id: i32,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub country_code: String,
    pub zipcode: String,
    pub state_code: String,
    pub city: String,
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub email: String,
}

/// A paid order as returned by the order-details endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedOrder {
    pub id: OrderId,
    pub user_id: UserId,
    pub order_no: String,
    pub status: i32,
    pub total_amount: String,
    #[serde(default)]
    pub due_amount: String,
    #[serde(default)]
    pub logistics_cost: String,
    #[serde(default)]
    pub discount_amount: String,
    #[serde(default)]
    pub tax_amount: String,
    pub currency: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: i32,
    #[serde(default)]
    pub express_status: i32,
    #[serde(default)]
    pub card_brand: String,
    #[serde(default)]
    pub card_last_four: String,
    #[serde(default)]
    pub tracking_url: Option<String>,
    #[serde(default)]
    pub shop_order_info_details: Vec<OrderItemDetail>,
    pub shop_customer_ship_info: CustomerShipInfo,
    pub shop_bill_ship_info: CustomerShipInfo,
}
