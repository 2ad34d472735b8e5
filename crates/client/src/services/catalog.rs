//! Public catalog operations: products and categories.
//!
//! These endpoints work without a session; when a token exists it is
//! attached anyway, which the backend ignores.

use url::form_urlencoded;

use lavanta_core::{Category, Product, ProductListing, ProductQuery};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/products` and `/categories` endpoints.
#[derive(Clone)]
pub struct CatalogService {
    transport: ApiTransport,
}

impl CatalogService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// List products matching the query.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn products(&self, query: &ProductQuery) -> Result<ProductListing, TransportError> {
        self.transport.get(&listing_path(query)).await
    }

    /// Fetch one product by identifier or slug.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn product(&self, id_or_slug: &str) -> Result<Product, TransportError> {
        self.transport.get(&format!("/products/{id_or_slug}")).await
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn categories(&self) -> Result<Vec<Category>, TransportError> {
        self.transport.get("/categories").await
    }
}

fn listing_path(query: &ProductQuery) -> String {
    let params = query.params();
    if params.is_empty() {
        return "/products".to_owned();
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, &value);
    }
    format!("/products?{}", serializer.finish())
}
