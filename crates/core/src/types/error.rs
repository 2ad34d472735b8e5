//! Normalized error representation surfaced to the UI layer.
//!
//! Every failed backend interaction is eventually classified into an
//! [`ApiError`]: a kind the caller can branch on plus a message that is safe
//! to render. Classification itself lives in the client crate (it needs the
//! HTTP types); the representation lives here so it stays I/O-free.

use serde::{Deserialize, Serialize};

/// Classification of a failed backend interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No response was received (connection refused, DNS, timeout).
    Network,
    /// The backend rejected the credentials or the session token (401).
    Auth,
    /// The request payload was rejected (400 or 422).
    Validation,
    /// The addressed resource does not exist (404).
    NotFound,
    /// The backend failed internally (5xx).
    Server,
    /// Anything that fits no other kind, including undecodable responses.
    Unknown,
}

/// A classified, UI-safe representation of a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// What went wrong, in terms the caller can branch on.
    pub kind: ErrorKind,
    /// Human-readable message, ready to render.
    pub message: String,
    /// The HTTP status that produced this error, when one was received.
    pub status: Option<u16>,
}

impl ApiError {
    /// Create an error with no associated HTTP status.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    /// Attach the HTTP status that produced this error.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether this error must tear down the session.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_the_message_only() {
        let err = ApiError::new(ErrorKind::Validation, "Geçersiz adres tipi.").with_status(400);
        assert_eq!(err.to_string(), "Geçersiz adres tipi.");
    }

    #[test]
    fn only_auth_kind_is_auth() {
        assert!(ApiError::new(ErrorKind::Auth, "x").is_auth());
        assert!(!ApiError::new(ErrorKind::Server, "x").is_auth());
        assert!(!ApiError::new(ErrorKind::Network, "x").is_auth());
    }
}
