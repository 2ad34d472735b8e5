//! Cart operations.

use lavanta_core::{CartAddRequest, CartSummary};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/cart` endpoints.
#[derive(Clone)]
pub struct CartService {
    transport: ApiTransport,
}

impl CartService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Fetch the current cart.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn get(&self) -> Result<CartSummary, TransportError> {
        self.transport.get("/cart").await
    }

    /// Add a product to the cart.
    ///
    /// The payload is passed through as built by the caller; the backend
    /// owns validation.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn add(&self, request: &CartAddRequest) -> Result<CartSummary, TransportError> {
        self.transport.post("/cart", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> CartService {
        let session = SessionStore::in_memory();
        session.set("abc", None);
        CartService::new(ApiTransport::new(&ClientConfig::new(server.uri()), session))
    }

    #[tokio::test]
    async fn add_sends_variant_sku_only_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cart"))
            .and(body_json(json!({
                "productId": "p1",
                "quantity": 1,
                "variantSku": "M"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "c1",
                "items": [{"product": "p1", "quantity": 1}],
                "total": 550.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cart = service(&server)
            .add(&CartAddRequest {
                product_id: "p1".into(),
                quantity: 1,
                variant_sku: Some("M".into()),
            })
            .await
            .expect("cart updated");
        assert_eq!(cart.items.len(), 1);
    }
}
