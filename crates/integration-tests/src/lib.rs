//! End-to-end scenario tests for the Lavanta storefront client.
//!
//! Each test drives the public client surface against a mock backend:
//! wire a [`Storefront`] at a `wiremock` server, script the UI
//! capabilities (navigation, confirmation prompts), run a user flow, and
//! assert on both the client state and the requests the backend saw.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lavanta-integration-tests
//! ```

use std::sync::{Arc, Mutex, Once, PoisonError};

use wiremock::MockServer;

use lavanta_client::pages::favorites::{ConfirmPrompt, Confirmation};
use lavanta_client::{ClientConfig, Navigate, SessionStore, Storefront};

static TRACING: Once = Once::new();

/// Initialize test logging once per process.
///
/// Controlled with `RUST_LOG`, e.g. `RUST_LOG=lavanta_client=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A mock backend plus a fully wired client.
pub struct TestContext {
    /// The mock backend; mount expectations on it before acting.
    pub server: MockServer,
    /// The session store shared by every service.
    pub session: SessionStore,
    /// The client under test.
    pub storefront: Storefront,
    /// Records navigations the error handler performs.
    pub navigator: Arc<RecordingNavigator>,
}

impl TestContext {
    /// Start a mock backend and wire a client at it.
    pub async fn new() -> Self {
        Self::at_path("/hesabim/favoriler").await
    }

    /// Same as [`new`], pretending the user is on `current_path`.
    ///
    /// [`new`]: Self::new
    pub async fn at_path(current_path: &str) -> Self {
        init_tracing();
        let server = MockServer::start().await;
        let session = SessionStore::in_memory();
        let storefront = Storefront::new(&ClientConfig::new(server.uri()), session.clone());
        Self {
            server,
            session,
            storefront,
            navigator: RecordingNavigator::at(current_path),
        }
    }

    /// Store a token as if the user had logged in earlier.
    pub fn login_as(&self, token: &str) {
        self.session.set(token, None);
    }
}

/// Navigation capability that records instead of navigating.
pub struct RecordingNavigator {
    path: String,
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Create a navigator that reports `path` as the current location.
    #[must_use]
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: path.to_owned(),
            visits: Mutex::new(Vec::new()),
        })
    }

    /// Every location the client navigated to, in order.
    #[must_use]
    pub fn visits(&self) -> Vec<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
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
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_owned());
    }
}

/// Confirmation capability with pre-scripted answers.
///
/// Answers are consumed in order; once exhausted every further question is
/// declined.
pub struct ScriptedPrompt {
    answers: Mutex<Vec<bool>>,
}

impl ScriptedPrompt {
    /// Script the answers, first question first.
    #[must_use]
    pub fn answering(answers: &[bool]) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.iter().rev().copied().collect()),
        })
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, _request: &Confirmation<'_>) -> bool {
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or(false)
    }
}
