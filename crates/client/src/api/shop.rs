//! Shop, checkout, and guide-binding endpoints.

use serde::Serialize;
use serde_json::Value;

use repairhub_core::{CompletedOrder, OrderId, PartId, SalesArea, ShopPart, ToolId};

use crate::gateway::{Gateway, GatewayError};

/// Cart payload sent to checkout/availability endpoints: the lines plus the
/// sales area they were priced under.
#[derive(Debug, Serialize)]
struct ShopPartPayload<'a> {
    shop_part_data: &'a [ShopPart],
    sales_area: SalesArea,
}

/// Start a checkout session for the given cart lines.
///
/// # Errors
///
/// Propagates gateway failures (transport, status, business).
pub async fn create_checkout_session(
    gateway: &Gateway,
    parts: &[ShopPart],
    sales_area: SalesArea,
) -> Result<Value, GatewayError> {
    gateway
        .post(
            "/self-repair/shop-order/createCheckoutSession",
            &ShopPartPayload {
                shop_part_data: parts,
                sales_area,
            },
        )
        .await
}

/// Check whether any of the given cart lines has been removed from sale.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn check_part_is_remove(
    gateway: &Gateway,
    parts: &[ShopPart],
    sales_area: SalesArea,
) -> Result<Value, GatewayError> {
    gateway
        .post(
            "/self-repair/shop-order/checkPartIsRemove",
            &ShopPartPayload {
                shop_part_data: parts,
                sales_area,
            },
        )
        .await
}

/// Calculate the shipping options for an address/cart combination.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn calculate_shipping_options(
    gateway: &Gateway,
    request: &Value,
) -> Result<Value, GatewayError> {
    gateway
        .post("/self-repair/shop-order/calculateShippingOptions", request)
        .await
}

/// List parts available for self repair.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn get_parts_list(
    gateway: &Gateway,
    query: &[(&str, String)],
) -> Result<Value, GatewayError> {
    gateway
        .get("/self-repair/shop-part/selfRepairList", query)
        .await
}

/// Fetch a completed order by id.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn get_completed_order(
    gateway: &Gateway,
    id: OrderId,
) -> Result<CompletedOrder, GatewayError> {
    gateway
        .get(
            "/self-repair/shop-order/details",
            &[("id", id.to_string())],
        )
        .await
}

/// Bind tools to a released guide.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn tool_binding(gateway: &Gateway, request: &Value) -> Result<Value, GatewayError> {
    gateway
        .post("/self-repair/guides-release/toolBinding", request)
        .await
}

/// Bind parts to a released guide.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn part_binding(gateway: &Gateway, request: &Value) -> Result<Value, GatewayError> {
    gateway
        .post("/self-repair/guides-release/partBinding", request)
        .await
}

/// Delete a bound tool by id.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn delete_tool(gateway: &Gateway, id: ToolId) -> Result<Value, GatewayError> {
    gateway
        .delete(&format!("/self-repair/guides-release/deleteTool/{id}"))
        .await
}

/// Delete a bound part by id.
///
/// # Errors
///
/// Propagates gateway failures.
pub async fn delete_part(gateway: &Gateway, id: PartId) -> Result<Value, GatewayError> {
    gateway
        .delete(&format!("/self-repair/guides-release/deletePart/{id}"))
        .await
}
