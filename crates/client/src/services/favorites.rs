//! Favorites collection operations.

use serde::Serialize;

use lavanta_core::{FavoriteCreated, FavoriteItem, MessageResponse, decode_favorites};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/favorites` endpoints.
#[derive(Clone)]
pub struct FavoritesService {
    transport: ApiTransport,
}

impl FavoritesService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// List the logged-in user's favorites as a flat ordered sequence.
    ///
    /// The wrapping envelope varies by backend version; it is decoded at
    /// this boundary and unknown shapes are rejected rather than silently
    /// flattened to an empty list.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure, including a shape error
    /// for payloads outside the known envelope set.
    pub async fn list(&self) -> Result<Vec<FavoriteItem>, TransportError> {
        let raw: serde_json::Value = self.transport.get("/favorites").await?;
        Ok(decode_favorites(raw)?)
    }

    /// Add a product to the favorites collection.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn add(&self, product_id: &str) -> Result<FavoriteCreated, TransportError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct AddFavorite<'a> {
            product_id: &'a str,
        }

        self.transport
            .post("/favorites", &AddFavorite { product_id })
            .await
    }

    /// Remove an entry from the favorites collection.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn remove(&self, favorite_id: &str) -> Result<MessageResponse, TransportError> {
        self.transport
            .delete(&format!("/favorites/{favorite_id}"))
            .await
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

    fn service(server: &MockServer) -> FavoritesService {
        let session = SessionStore::in_memory();
        session.set("abc", None);
        FavoritesService::new(ApiTransport::new(&ClientConfig::new(server.uri()), session))
    }

    #[tokio::test]
    async fn list_normalizes_wrapped_bare_and_empty_payloads() {
        for (body, expected_len) in [
            (json!({"favorites": [{"id": "p1"}]}), 1),
            (json!([{"id": "p2"}]), 1),
            (json!({}), 0),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/favorites"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;

            let items = service(&server).list().await.expect("known shape");
            assert_eq!(items.len(), expected_len);
        }
    }

    #[tokio::test]
    async fn add_posts_the_product_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/favorites"))
            .and(body_json(json!({"productId": "p1"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Ürün favorilere eklendi.",
                "id": "f1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = service(&server).add("p1").await.expect("created");
        assert_eq!(created.id, "f1");
    }

    #[tokio::test]
    async fn remove_targets_the_entry_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/favorites/f1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Ürün favorilerden çıkarıldı."})),
            )
            .expect(1)
            .mount(&server)
            .await;

        service(&server).remove("f1").await.expect("removed");
    }
}
