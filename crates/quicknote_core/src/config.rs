//! Process configuration for the remote store connection.
//!
//! # Responsibility
//! - Read the store endpoint URL and public access key exactly once.
//! - Reject missing or malformed values before any request is issued.
//!
//! # Invariants
//! - A `StoreConfig` always holds a parsed absolute `http(s)` URL and a
//!   non-blank key.
//! - Missing credentials are the only fatal error path in the system.

use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;

/// Environment variable holding the store endpoint URL.
pub const STORE_URL_VAR: &str = "QUICKNOTE_STORE_URL";
/// Environment variable holding the store public access key.
pub const STORE_KEY_VAR: &str = "QUICKNOTE_STORE_KEY";
/// Optional log level override.
pub const LOG_LEVEL_VAR: &str = "QUICKNOTE_LOG_LEVEL";
/// Optional absolute log directory; file logging stays off when unset.
pub const LOG_DIR_VAR: &str = "QUICKNOTE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required variable is absent or blank.
    Missing(&'static str),
    /// Endpoint URL cannot be parsed or is not http(s).
    InvalidUrl { value: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "missing required configuration `{var}`"),
            Self::InvalidUrl { value, reason } => {
                write!(f, "invalid store url `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Connection settings for the remote notes store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    url: Url,
    anon_key: String,
}

impl StoreConfig {
    /// Builds a config from explicit values.
    ///
    /// # Errors
    /// - `Missing` when either value is blank.
    /// - `InvalidUrl` when `url` is not an absolute http(s) URL.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing(STORE_URL_VAR));
        }
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(STORE_KEY_VAR));
        }

        let parsed = Url::parse(url).map_err(|err| ConfigError::InvalidUrl {
            value: url.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                value: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            url: parsed,
            anon_key: anon_key.to_string(),
        })
    }

    /// Reads the config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the config through a caller-provided variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(STORE_URL_VAR).ok_or(ConfigError::Missing(STORE_URL_VAR))?;
        let key = lookup(STORE_KEY_VAR).ok_or(ConfigError::Missing(STORE_KEY_VAR))?;
        Self::new(&url, &key)
    }

    /// Store base URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Public access key sent with every request.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }
}
