//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults target a local backend.
//!
//! - `STOREFRONT_API_URL` - Origin of the commerce backend
//!   (default: `http://localhost:8000`)
//! - `STOREFRONT_LOGIN_PATH` - Path the client navigates to when a session
//!   is torn down (default: `/giris`)
//! - `STOREFRONT_SESSION_FILE` - File the session is persisted to; when
//!   unset the session lives only in memory

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_LOGIN_PATH: &str = "/giris";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to an unusable value.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the commerce backend, without a trailing slash.
    pub base_url: String,
    /// Path of the login page used for auth-failure redirects.
    pub login_path: String,
    /// Where to persist the session, when persistence is wanted.
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a configuration for a known backend origin.
    ///
    /// Uses the default login path and no session persistence.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_origin(base_url.into()),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            session_file: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `STOREFRONT_API_URL` is set but does not
    /// parse as an absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("STOREFRONT_API_URL", DEFAULT_API_URL);
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_API_URL".to_owned(), e.to_string())
        })?;

        let login_path = get_env_or_default("STOREFRONT_LOGIN_PATH", DEFAULT_LOGIN_PATH);
        let session_file = env::var("STOREFRONT_SESSION_FILE").ok().map(PathBuf::from);

        Ok(Self {
            base_url: normalize_origin(base_url),
            login_path,
            session_file,
        })
    }
}

fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn normalize_origin(mut origin: String) -> String {
    while origin.ends_with('/') {
        origin.pop();
    }
    origin
}
