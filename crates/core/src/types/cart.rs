//! Cart payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload for `POST /cart`.
///
/// `variantSku` is serialized only when the source item carries one; the
/// backend treats its presence as meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    /// Product to add.
    pub product_id: String,
    /// Number of units.
    pub quantity: u32,
    /// SKU of the chosen variant, when one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_sku: Option<String>,
}

/// One line in the cart as the backend reports it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Identifier of the cart line.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Product the line refers to.
    #[serde(default)]
    pub product: Option<String>,
    /// Denormalized product name.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Denormalized product image URL.
    #[serde(default)]
    pub product_image: Option<String>,
    /// SKU of the variant in the cart.
    #[serde(default)]
    pub variant_sku: Option<String>,
    /// Unit price at the time the line was added.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Number of units.
    #[serde(default)]
    pub quantity: u32,
    /// Line total.
    #[serde(default)]
    pub subtotal: Option<Decimal>,
}

/// The cart as the backend reports it after a mutation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Cart identifier.
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Cart lines.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Sum of line totals before discounts.
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    /// Discount applied by an active campaign.
    #[serde(default)]
    pub discount_amount: Option<Decimal>,
    /// Shipping cost.
    #[serde(default)]
    pub shipping_cost: Option<Decimal>,
    /// Grand total.
    #[serde(default)]
    pub total: Option<Decimal>,
}
