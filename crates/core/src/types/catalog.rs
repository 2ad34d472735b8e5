//! Public catalog types: products, categories, and the listing query.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A product in the public catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier (`id` or `_id` on the wire).
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Regular price.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Discounted price, when a sale is active.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// Owning category identifier.
    #[serde(default)]
    pub category: Option<String>,
    /// Brand label.
    #[serde(default)]
    pub brand: Option<String>,
    /// Whether the product is flagged as new.
    #[serde(default)]
    pub is_new: bool,
    /// Whether the product is featured on the home page.
    #[serde(default)]
    pub is_featured: bool,
    /// Product images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Purchasable variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Stock summed over all variants.
    #[serde(default)]
    pub total_stock: u32,
}

/// One product image.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Alt text.
    #[serde(default)]
    pub alt: Option<String>,
    /// Whether this is the main image.
    #[serde(default)]
    pub is_main: bool,
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Variant SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// Size label.
    #[serde(default)]
    pub size: Option<String>,
    /// Color name.
    #[serde(default)]
    pub color_name: Option<String>,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
}

/// A catalog category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier (`id` or `_id` on the wire).
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Parent category identifier, for nested categories.
    #[serde(default)]
    pub parent_category: Option<String>,
}

/// A page of catalog products.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    /// The products on this page.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Paging information, when the backend includes it.
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Paging block attached to listing responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total matching products.
    #[serde(default)]
    pub total: u32,
    /// Current page, 1-based.
    #[serde(default)]
    pub page: u32,
    /// Page size.
    #[serde(default)]
    pub limit: u32,
    /// Total pages.
    #[serde(default)]
    pub total_pages: u32,
}

/// Filters, paging, and sorting for the product listing.
///
/// Only the set fields become query parameters; field names follow the
/// backend's query-string contract.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Filter by category slug or identifier.
    pub category: Option<String>,
    /// Free-text search.
    pub q: Option<String>,
    /// Lower price bound.
    pub min_price: Option<Decimal>,
    /// Upper price bound.
    pub max_price: Option<Decimal>,
    /// Only products flagged as new.
    pub is_new: Option<bool>,
    /// Only featured products.
    pub is_featured: Option<bool>,
    /// Page to fetch, 1-based.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Sort key, e.g. `price_asc` or `createdAt_desc`.
    pub sort: Option<String>,
}

impl ProductQuery {
    /// The query parameters this filter set produces, in a stable order.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("maxPrice", max_price.to_string()));
        }
        if let Some(is_new) = self.is_new {
            params.push(("isNew", is_new.to_string()));
        }
        if let Some(is_featured) = self.is_featured {
            params.push(("isFeatured", is_featured.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        params
    }
}
