//! Authentication operations: login, registration, logout.

use lavanta_core::{RegisterRequest, Session, Token, UserIdentity};

use crate::transport::{ApiTransport, TransportError};

/// Client for the `/auth` endpoints.
#[derive(Clone)]
pub struct AuthService {
    transport: ApiTransport,
}

impl AuthService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Log in with email and password.
    ///
    /// The login endpoint takes a form-encoded body (`username` carries the
    /// email). On success the token is stored immediately so the follow-up
    /// identity fetch - and everything after it - is authenticated. A
    /// failed identity fetch leaves the session token-only; it is logged,
    /// not raised.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error when the credentials are rejected
    /// or the backend is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, TransportError> {
        let token: Token = self
            .transport
            .post_form("/auth/login", &[("username", email), ("password", password)])
            .await?;
        tracing::debug!(token_type = %token.token_type, "login succeeded");

        let store = self.transport.session();
        store.set(token.access_token.clone(), None);

        let user = match self.transport.get::<UserIdentity>("/user/profile").await {
            Ok(user) => {
                store.set_user(user.clone());
                Some(user)
            }
            Err(error) => {
                tracing::warn!(%error, "could not fetch identity after login");
                None
            }
        };

        Ok(Session {
            token: token.access_token,
            user,
        })
    }

    /// Register a new account.
    ///
    /// Registration does not log the user in; the backend expects a
    /// separate login afterwards.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error on failure.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserIdentity, TransportError> {
        self.transport.post("/auth/register", request).await
    }

    /// Log out.
    ///
    /// The session store is cleared whether or not the remote call
    /// succeeds - a dead backend must not keep a client logged in.
    ///
    /// # Errors
    ///
    /// Returns the raw transport error from the remote call; the local
    /// session is gone either way.
    pub async fn logout(&self) -> Result<(), TransportError> {
        let result = self
            .transport
            .post_empty::<serde_json::Value>("/auth/logout")
            .await;
        self.transport.session().clear();
        result.map(|_| ())
    }
}
