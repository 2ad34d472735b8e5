//! Session ownership and persistence.
//!
//! The session (token + identity) is owned by a single [`SessionStore`]
//! that is constructed explicitly and handed to the transport and services.
//! Nothing in this crate reads authentication state from ambient storage.
//!
//! Persistence is a capability: [`MemoryBackend`] keeps the session for the
//! lifetime of the process, [`FileBackend`] survives restarts. Persistence
//! failures are logged and never fail the caller; losing a persisted
//! session only means logging in again.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use lavanta_core::{Session, UserIdentity};

/// Storage a [`SessionStore`] persists through.
pub trait SessionBackend: Send + Sync {
    /// Read the persisted session, if any.
    fn load(&self) -> Option<Session>;
    /// Persist the session.
    fn store(&self, session: &Session);
    /// Remove the persisted session. Must be idempotent.
    fn clear(&self);
}

/// Keeps the session in memory only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl SessionBackend for MemoryBackend {
    fn load(&self) -> Option<Session> {
        None
    }

    fn store(&self, _session: &Session) {}

    fn clear(&self) {}
}

/// Persists the session as JSON in a file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Persist into the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionBackend for FileBackend {
    fn load(&self) -> Option<Session> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "could not read session file");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "session file is corrupt");
                None
            }
        }
    }

    fn store(&self, session: &Session) {
        let encoded = match serde_json::to_string(session) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(%error, "could not encode session");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, encoded) {
            tracing::warn!(path = %self.path.display(), %error, "could not persist session");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "could not remove session file");
            }
        }
    }
}

/// Owner of the current session.
///
/// Cheaply cloneable; all clones share one underlying session, so a
/// `clear()` from any call site is observed immediately by every holder.
/// `clear()` is idempotent and safe to call from multiple sites (direct
/// logout and the auth-failure path both do).
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    current: RwLock<Option<Session>>,
    backend: Box<dyn SessionBackend>,
}

impl SessionStore {
    /// Create a store over the given persistence backend, restoring any
    /// previously persisted session.
    #[must_use]
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        let current = backend.load();
        Self {
            inner: Arc::new(StoreInner {
                current: RwLock::new(current),
                backend: Box::new(backend),
            }),
        }
    }

    /// Create a store with no persistence.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend)
    }

    /// The current session, if one exists.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.read().clone()
    }

    /// The current token, if a session exists.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.token.clone())
    }

    /// The current user identity, if known.
    #[must_use]
    pub fn user(&self) -> Option<UserIdentity> {
        self.read().as_ref().and_then(|session| session.user.clone())
    }

    /// Whether a session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Replace the session.
    pub fn set(&self, token: impl Into<String>, user: Option<UserIdentity>) {
        let session = Session {
            token: token.into(),
            user,
        };
        self.inner.backend.store(&session);
        *self.write() = Some(session);
    }

    /// Attach or replace the identity of the current session.
    ///
    /// Does nothing when no session exists (the identity arrived after a
    /// teardown already happened).
    pub fn set_user(&self, user: UserIdentity) {
        let mut guard = self.write();
        if let Some(session) = guard.as_mut() {
            session.user = Some(user);
            self.inner.backend.store(session);
        }
    }

    /// Destroy the session.
    pub fn clear(&self) {
        if self.write().take().is_some() {
            tracing::debug!("session cleared");
        }
        self.inner.backend.clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
