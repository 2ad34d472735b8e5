//! Orders as the backend reports them.
//!
//! The order endpoints wrap their payloads inconsistently: the listing
//! comes as `{"orders": [...]}`, `{"data": [...]}`, or a bare array, and
//! the detail endpoint wraps the order under `"data"` or `"order"`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use super::envelope::{ShapeError, decode_list, json_kind};

/// A placed order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier (`id` or `_id` on the wire).
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Human-facing order number.
    #[serde(default)]
    pub order_number: Option<String>,
    /// Current fulfillment status.
    #[serde(default)]
    pub status: Option<String>,
    /// Free-text elaboration of the status.
    #[serde(default)]
    pub status_description: Option<String>,
    /// Sum of line totals.
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    /// Grand total charged.
    #[serde(default, alias = "totalAmount")]
    pub total: Option<Decimal>,
    /// When the order was placed.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Ordered lines.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// One line of an order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product the line refers to.
    #[serde(default)]
    pub product_id: Option<String>,
    /// Product name at the time of ordering.
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price at the time of ordering.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Number of units.
    #[serde(default)]
    pub quantity: u32,
    /// Product image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Variant the line was ordered in.
    #[serde(default)]
    pub variant: Option<OrderItemVariant>,
    /// Line total.
    #[serde(default)]
    pub subtotal: Option<Decimal>,
}

/// Variant details of an ordered line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemVariant {
    /// Size label.
    #[serde(default)]
    pub size: Option<String>,
    /// Color name.
    #[serde(default)]
    pub color_name: Option<String>,
    /// Variant SKU.
    #[serde(default)]
    pub sku: Option<String>,
}

/// Decode an order listing payload into a flat ordered list.
///
/// # Errors
///
/// Returns a [`ShapeError`] when the payload is outside the known envelope
/// set (see [`decode_list`]).
pub fn decode_orders(value: Value) -> Result<Vec<Order>, ShapeError> {
    decode_list(value, "orders", &["orders", "data"])
}

/// Decode an order detail payload, unwrapping the known envelopes.
///
/// # Errors
///
/// Returns a [`ShapeError`] when the payload is not an object or the order
/// inside it is malformed.
pub fn decode_order(value: Value) -> Result<Order, ShapeError> {
    match value {
        Value::Object(mut map) => {
            let source = map
                .remove("data")
                .or_else(|| map.remove("order"))
                .unwrap_or(Value::Object(map));
            serde_json::from_value(source).map_err(|source| ShapeError::Entry {
                expected: "order",
                source,
            })
        }
        other => Err(ShapeError::Unexpected {
            expected: "order",
            found: json_kind(&other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_decodes_wrapped_and_bare_shapes() {
        let named = decode_orders(json!({"orders": [{"id": "o1"}]})).expect("named field");
        assert_eq!(named.len(), 1);

        let data = decode_orders(json!({"data": [{"_id": "o2", "total": 750.0}]}))
            .expect("data field");
        assert_eq!(data.first().and_then(|o| o.id.as_deref()), Some("o2"));

        let bare = decode_orders(json!([])).expect("bare empty");
        assert!(bare.is_empty());
    }

    #[test]
    fn detail_unwraps_data_envelope() {
        let order = decode_order(json!({
            "success": true,
            "data": {"id": "o1", "status": "shipped", "items": [{"name": "Elbise", "quantity": 2}]}
        }))
        .expect("data envelope");
        assert_eq!(order.status.as_deref(), Some("shipped"));
        assert_eq!(order.items.first().map(|i| i.quantity), Some(2));
    }

    #[test]
    fn detail_accepts_a_bare_order_object() {
        let order = decode_order(json!({"id": "o1", "totalAmount": 550.0})).expect("bare");
        assert_eq!(order.total, Some(Decimal::from(550)));
    }

    #[test]
    fn detail_rejects_non_object_payloads() {
        assert!(decode_order(json!([1, 2])).is_err());
    }
}
