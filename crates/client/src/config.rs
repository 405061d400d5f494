//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `REPAIRHUB_API_BASE` - Base URL of the shop backend API
//!
//! ## Optional
//! - `REPAIRHUB_TOKEN` - Bootstrap bearer token for an existing session
//! - `REPAIRHUB_STATE_DIR` - Directory for persisted store state

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the shop backend API. Always ends with a slash so
    /// endpoint paths join below it instead of replacing it.
    pub api_base: Url,
    /// Bootstrap bearer token, if a session already exists.
    pub token: Option<SecretString>,
    /// Directory for persisted store state (cart, sales area).
    pub state_dir: Option<PathBuf>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base", &self.api_base.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("state_dir", &self.state_dir)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given API base URL.
    #[must_use]
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base: ensure_trailing_slash(api_base),
            token: None,
            state_dir: None,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `REPAIRHUB_API_BASE` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = get_required_env("REPAIRHUB_API_BASE")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("REPAIRHUB_API_BASE".to_string(), e.to_string())
            })?;
        let token = get_optional_env("REPAIRHUB_TOKEN").map(SecretString::from);
        let state_dir = get_optional_env("REPAIRHUB_STATE_DIR").map(PathBuf::from);

        Ok(Self {
            api_base: ensure_trailing_slash(api_base),
            token,
            state_dir,
        })
    }
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
