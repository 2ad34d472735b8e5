//! Lavanta storefront data-access layer.
//!
//! This crate is the client side of the Lavanta storefront: an
//! authenticated transport over the commerce backend's REST API, one
//! service per backend resource, a single error-classification point that
//! tears the session down on authentication failure, and the favorites
//! page controller that keeps the local favorites list in agreement with
//! the remote store.
//!
//! # Architecture
//!
//! - [`session::SessionStore`] owns the token and identity; it is passed
//!   explicitly into the transport, never read from ambient state.
//! - [`transport::ApiTransport`] attaches the bearer header iff a token
//!   exists at call time and surfaces raw [`transport::TransportError`]s.
//! - Services under [`services`] map 1:1 to backend endpoints and relay
//!   transport errors untouched.
//! - [`error::ErrorHandler`] is the only place errors are classified and
//!   the only place the auth-failure side effect (session clear + login
//!   redirect) fires.
//! - [`pages::favorites::FavoritesPage`] reconciles the in-memory
//!   favorites list with the remote store across remove, add, and
//!   cart-transfer actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use lavanta_client::{ClientConfig, SessionStore, Storefront};
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionStore::in_memory();
//! let store = Storefront::new(&config, session);
//!
//! let user = store.auth().login("ayse@example.com", "parola").await?;
//! let orders = store.orders().list().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod session;
pub mod storefront;
pub mod transport;

pub use config::{ClientConfig, ConfigError};
pub use error::{ErrorHandler, Navigate, classify};
pub use session::{FileBackend, MemoryBackend, SessionBackend, SessionStore};
pub use storefront::Storefront;
pub use transport::{ApiTransport, TransportError};
