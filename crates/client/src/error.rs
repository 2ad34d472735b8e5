//! Error classification and the auth-failure side effect.
//!
//! [`classify`] is the single mapping from raw transport errors to the
//! [`ApiError`] the UI renders. [`ErrorHandler::handle`] wraps it with the
//! one side effect this layer owns: when the classification is an auth
//! failure, the session store is cleared and the client navigates to the
//! login page with the current location as a redirect-back parameter. That
//! side effect fires on every handled auth failure regardless of which
//! service raised it, and nowhere else.

use std::sync::Arc;

use lavanta_core::{ApiError, ErrorKind};

use crate::config::ClientConfig;
use crate::session::SessionStore;
use crate::transport::TransportError;

/// Message shown when the backend rejects the session token.
const SESSION_EXPIRED: &str = "Oturum süresi doldu. Lütfen tekrar giriş yapın.";
/// Message shown when no response was received at all.
const UNREACHABLE: &str = "Sunucuya bağlanılamadı. Lütfen daha sonra tekrar deneyin.";
/// Message shown when a response could not be decoded.
const UNDECODABLE: &str = "Beklenmeyen bir sunucu yanıtı alındı.";

/// Navigation capability implemented by the UI layer.
///
/// The data layer decides *that* a navigation happens and *where to*; how
/// a location change is performed belongs to the rendering layer.
pub trait Navigate: Send + Sync {
    /// The path the user is currently on, used as the redirect-back target.
    fn current_path(&self) -> String;
    /// Navigate to the given location.
    fn go(&self, location: &str);
}

/// Classify a raw transport error into a normalized, renderable error.
///
/// Carries no consequences; the session-teardown side effect lives in
/// [`ErrorHandler::handle`]. The mapping:
///
/// | raw error | kind |
/// |---|---|
/// | no response received | `Network` |
/// | status 401 | `Auth` |
/// | status 400 or 422 | `Validation` |
/// | status 404 | `NotFound` |
/// | status >= 500 | `Server` |
/// | anything else (incl. undecodable bodies) | `Unknown` |
#[must_use]
pub fn classify(error: &TransportError) -> ApiError {
    match error {
        TransportError::Http(source) => {
            tracing::debug!(%source, "network failure");
            ApiError::new(ErrorKind::Network, UNREACHABLE)
        }
        TransportError::Status { status, message } => {
            let kind = match *status {
                401 => ErrorKind::Auth,
                400 | 422 => ErrorKind::Validation,
                404 => ErrorKind::NotFound,
                500.. => ErrorKind::Server,
                _ => ErrorKind::Unknown,
            };
            let message = if kind == ErrorKind::Auth {
                SESSION_EXPIRED.to_owned()
            } else {
                message.clone()
            };
            ApiError {
                kind,
                message,
                status: Some(*status),
            }
        }
        TransportError::Parse(_) | TransportError::Shape(_) => {
            ApiError::new(ErrorKind::Unknown, UNDECODABLE)
        }
    }
}

/// The single point where errors are classified with consequences.
///
/// Cheaply cloneable; every page shares one handler so the auth side
/// effect is uniform across the client.
#[derive(Clone)]
pub struct ErrorHandler {
    inner: Arc<HandlerInner>,
}

struct HandlerInner {
    session: SessionStore,
    navigator: Arc<dyn Navigate>,
    login_path: String,
}

impl ErrorHandler {
    /// Create a handler over the shared session store and the UI's
    /// navigation capability.
    #[must_use]
    pub fn new(config: &ClientConfig, session: SessionStore, navigator: Arc<dyn Navigate>) -> Self {
        Self {
            inner: Arc::new(HandlerInner {
                session,
                navigator,
                login_path: config.login_path.clone(),
            }),
        }
    }

    /// Classify an error and apply the auth-failure side effect.
    ///
    /// On an `Auth` classification the session store is cleared and the
    /// navigator is sent to the login page with the current path as a
    /// URI-encoded `redirect` parameter - exactly once per call. All other
    /// kinds are side-effect-free; the caller renders the message.
    #[must_use]
    pub fn handle(&self, error: &TransportError) -> ApiError {
        let normalized = classify(error);
        if normalized.is_auth() {
            let current = self.inner.navigator.current_path();
            tracing::warn!(path = %current, "authentication failure, tearing down session");
            self.inner.session.clear();
            let target = format!(
                "{}?redirect={}",
                self.inner.login_path,
                urlencoding::encode(&current)
            );
            self.inner.navigator.go(&target);
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records navigations instead of performing them.
    struct RecordingNavigator {
        path: String,
        visits: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        fn at(path: &str) -> Arc<Self> {
            Arc::new(Self {
                path: path.to_owned(),
                visits: Mutex::new(Vec::new()),
            })
        }

        fn visits(&self) -> Vec<String> {
            self.visits
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone()
        }
    }

    impl Navigate for RecordingNavigator {
        fn current_path(&self) -> String {
            self.path.clone()
        }

        fn go(&self, location: &str) {
            self.visits
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(location.to_owned());
        }
    }

    fn status_error(status: u16) -> TransportError {
        TransportError::Status {
            status,
            message: "backend message".to_owned(),
        }
    }

    #[test]
    fn classification_mapping() {
        let cases = [
            (400, ErrorKind::Validation),
            (401, ErrorKind::Auth),
            (404, ErrorKind::NotFound),
            (409, ErrorKind::Unknown),
            (422, ErrorKind::Validation),
            (500, ErrorKind::Server),
            (503, ErrorKind::Server),
        ];
        for (status, kind) in cases {
            let normalized = classify(&status_error(status));
            assert_eq!(normalized.kind, kind, "status {status}");
            assert_eq!(normalized.status, Some(status));
        }

        let shape = TransportError::Shape(lavanta_core::ShapeError::Unexpected {
            expected: "favorites",
            found: "string",
        });
        assert_eq!(classify(&shape).kind, ErrorKind::Unknown);
    }

    #[test]
    fn non_auth_kinds_keep_the_backend_message() {
        let normalized = classify(&status_error(404));
        assert_eq!(normalized.message, "backend message");
    }

    #[test]
    fn auth_kind_uses_the_session_expired_message() {
        let normalized = classify(&status_error(401));
        assert_eq!(normalized.message, SESSION_EXPIRED);
    }

    #[test]
    fn handle_clears_session_and_navigates_once_on_auth() {
        let config = ClientConfig::new("http://localhost:8000");
        let session = SessionStore::in_memory();
        session.set("abc", None);
        let navigator = RecordingNavigator::at("/hesabim/favoriler");
        let handler = ErrorHandler::new(&config, session.clone(), navigator.clone());

        let normalized = handler.handle(&status_error(401));
        assert_eq!(normalized.kind, ErrorKind::Auth);
        assert!(!session.is_authenticated());
        assert_eq!(
            navigator.visits(),
            vec!["/giris?redirect=%2Fhesabim%2Ffavoriler".to_owned()]
        );
    }

    #[test]
    fn handle_is_side_effect_free_for_other_kinds() {
        let config = ClientConfig::new("http://localhost:8000");
        let session = SessionStore::in_memory();
        session.set("abc", None);
        let navigator = RecordingNavigator::at("/hesabim");
        let handler = ErrorHandler::new(&config, session.clone(), navigator.clone());

        for status in [400, 404, 409, 500] {
            let _ = handler.handle(&status_error(status));
        }
        assert!(session.is_authenticated());
        assert!(navigator.visits().is_empty());
    }

    #[test]
    fn each_auth_classification_fires_exactly_one_teardown() {
        let config = ClientConfig::new("http://localhost:8000");
        let session = SessionStore::in_memory();
        session.set("abc", None);
        let navigator = RecordingNavigator::at("/hesabim");
        let handler = ErrorHandler::new(&config, session, navigator.clone());

        let _ = handler.handle(&status_error(401));
        let _ = handler.handle(&status_error(401));
        assert_eq!(navigator.visits().len(), 2);
    }
}
