//! Authenticated HTTP transport for the commerce backend.
//!
//! One entry point for every backend call. The transport reads the session
//! store at call time and attaches `Authorization: Bearer <token>` iff a
//! token exists, negotiates JSON, and converts non-2xx responses into
//! [`TransportError::Status`] with the backend's own message extracted from
//! the body. It performs exactly one attempt per invocation: no retry, no
//! coalescing of concurrent duplicates, and no response interception - a
//! 401 is surfaced like any other status and handled by the error module.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use lavanta_core::ShapeError;

use crate::config::ClientConfig;
use crate::session::SessionStore;

/// Errors raised by the transport, before classification.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A 2xx response body failed to deserialize.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A 2xx response body matched none of the known envelope shapes.
    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),
}

/// Authenticated HTTP entry point for the commerce backend.
#[derive(Clone)]
pub struct ApiTransport {
    inner: Arc<TransportInner>,
}

struct TransportInner {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
}

impl ApiTransport {
    /// Create a transport for the configured backend origin.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore) -> Self {
        Self {
            inner: Arc::new(TransportInner {
                http: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                session,
            }),
        }
    }

    /// The session store this transport reads tokens from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Issue a GET request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, TransportError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// Issue a POST request without a body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.execute(self.request(Method::POST, path)).await
    }

    /// Issue a POST request with a form-encoded body.
    ///
    /// The login endpoint expects `application/x-www-form-urlencoded`
    /// rather than JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &impl Serialize,
    ) -> Result<T, TransportError> {
        self.execute(self.request(Method::POST, path).form(form))
            .await
    }

    /// Issue a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, TransportError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    /// Issue a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, non-2xx status, or
    /// an undecodable body.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, TransportError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    /// Build a request with auth and content negotiation applied.
    ///
    /// The token is read from the session store at call time; a store
    /// cleared by another holder is observed immediately.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.inner.base_url);
        // Content negotiation is JSON throughout; `.json()` and `.form()`
        // replace the content type for the requests that carry a body.
        let mut builder = self
            .inner
            .http
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.inner.session.token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: extract_message(status, &body),
            });
        }

        if body.is_empty() {
            // Some mutations answer 2xx with no body; decode as JSON null
            // so `()` and `Option<T>` targets still work.
            serde_json::from_str("null").map_err(TransportError::Parse)
        } else {
            serde_json::from_str(&body).map_err(TransportError::Parse)
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The backend reports errors as `{"detail": ...}` (and some proxies as
/// `{"message": ...}`); fall back to the raw body, then to the status
/// line's canonical reason.
fn extract_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .or_else(|| json.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_owned()
            } else {
                body.to_owned()
            }
        })
}
