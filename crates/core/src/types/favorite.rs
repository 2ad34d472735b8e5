//! Favorite items and the shape-tolerant favorites listing.
//!
//! The favorites endpoints are the least consistent part of the backend:
//! the item identifier arrives as `id` or `_id`, the product details are an
//! optional nested summary, and the listing itself comes wrapped, bare, or
//! empty. Matching and decoding live here so every call site resolves
//! identity and shape the same way.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::cart::CartAddRequest;
use super::envelope::{ShapeError, decode_list};

/// One entry in a user's favorites collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    /// Primary identifier of the favorite entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Alternate identifier spelling some endpoints use instead.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub alt_id: Option<String>,
    /// Identifier of the favorited product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// SKU of the chosen variant, when the entry was created from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_sku: Option<String>,
    /// When the entry was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Denormalized product details, when the backend joined them in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductSummary>,
}

impl FavoriteItem {
    /// The identifier to address this entry by, preferring the primary
    /// spelling.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.alt_id.as_deref())
    }

    /// Whether `target` names this entry under either identifier spelling.
    ///
    /// Both fields must be checked everywhere an item is matched, added, or
    /// removed; the backend does not guarantee a single spelling.
    #[must_use]
    pub fn matches(&self, target: &str) -> bool {
        self.id.as_deref() == Some(target) || self.alt_id.as_deref() == Some(target)
    }

    /// Product name for prompts and messages, when known.
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.name.as_deref())
    }

    /// Build the cart payload for transferring this entry into the cart.
    ///
    /// The product identifier falls back to the entry identifier (older
    /// entries carry no `productId`), quantity is always one, and the
    /// variant SKU is included only when the entry has one. Returns `None`
    /// when the entry carries no identifier at all.
    #[must_use]
    pub fn cart_request(&self) -> Option<CartAddRequest> {
        let product_id = self.product_id.clone().or_else(|| self.id.clone())?;
        Some(CartAddRequest {
            product_id,
            quantity: 1,
            variant_sku: self.variant_sku.clone(),
        })
    }
}

/// Denormalized product details joined into a favorite entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Product identifier.
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Regular price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Discounted price, when a sale is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    /// Main image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether any variant is in stock.
    #[serde(default)]
    pub in_stock: bool,
}

impl ProductSummary {
    /// The price the UI should show: the sale price when one is active.
    #[must_use]
    pub fn effective_price(&self) -> Option<Decimal> {
        self.sale_price.or(self.price)
    }
}

/// Response to adding a product to the favorites collection.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteCreated {
    /// Confirmation message.
    pub message: String,
    /// Identifier of the created favorite entry.
    pub id: String,
}

/// Decode a favorites listing payload into a flat ordered list.
///
/// # Errors
///
/// Returns a [`ShapeError`] when the payload is outside the known envelope
/// set (see [`decode_list`]).
pub fn decode_favorites(value: Value) -> Result<Vec<FavoriteItem>, ShapeError> {
    decode_list(value, "favorites", &["favorites"])
}
