//! Remote store connection and request primitives.
//!
//! # Responsibility
//! - Hold the single authorized HTTP handle to the managed store.
//! - Translate table-level select/insert/update/delete into REST requests.
//!
//! # Invariants
//! - Every request carries the public key as `apikey` and bearer token.
//! - No retries and no timeouts; failures surface per call.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod client;

pub use client::{Filter, StoreClient};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// Access key cannot be encoded as an HTTP header value.
    InvalidKey,
    /// Base URL cannot carry a table path.
    InvalidEndpoint(String),
    /// Connection, TLS or protocol failure.
    Transport(reqwest::Error),
    /// Store answered with a non-success status.
    Status { status: u16, body: String },
    /// Response body does not match the expected row shape.
    Decode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "store access key is not a valid header value"),
            Self::InvalidEndpoint(url) => write!(f, "store url `{url}` cannot be a base url"),
            Self::Transport(err) => write!(f, "store request failed: {err}"),
            Self::Status { status, body } => write!(f, "store returned HTTP {status}: {body}"),
            Self::Decode(err) => write!(f, "unexpected store response: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InvalidKey | Self::InvalidEndpoint(_) | Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}
