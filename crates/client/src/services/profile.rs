//! Profile operations.

use lavanta_core::{ChangePasswordRequest, MessageResponse, ProfileUpdate, UserIdentity};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/user` endpoints.
#[derive(Clone)]
pub struct ProfileService {
    transport: ApiTransport,
}

impl ProfileService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Fetch the logged-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn get(&self) -> Result<UserIdentity, TransportError> {
        self.transport.get("/user/profile").await
    }

    /// Update the logged-in user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn update(&self, update: &ProfileUpdate) -> Result<UserIdentity, TransportError> {
        self.transport.put("/user/profile", update).await
    }

    /// Change the logged-in user's password.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, TransportError> {
        self.transport.put("/user/change-password", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn get_issues_an_authorized_profile_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/profile"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "u1", "email": "ayse@example.com"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::in_memory();
        session.set("abc", None);
        let service =
            ProfileService::new(ApiTransport::new(&ClientConfig::new(server.uri()), session));

        let profile = service.get().await.expect("profile");
        assert_eq!(profile.email.as_deref(), Some("ayse@example.com"));
    }

    #[tokio::test]
    async fn change_password_sends_camel_case_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/change-password"))
            .and(body_json(json!({
                "currentPassword": "eski",
                "newPassword": "yeni"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Şifre güncellendi."})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = SessionStore::in_memory();
        session.set("abc", None);
        let service =
            ProfileService::new(ApiTransport::new(&ClientConfig::new(server.uri()), session));

        let response = service
            .change_password(&ChangePasswordRequest {
                current_password: "eski".into(),
                new_password: "yeni".into(),
            })
            .await
            .expect("password change");
        assert_eq!(response.message, "Şifre güncellendi.");
    }
}
