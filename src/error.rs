//! Error types for the Open-Meteo client

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the client
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input, detected before any I/O
    #[error("invalid input: {0}")]
    Validation(String),

    /// The underlying transport failed (network, DNS, TLS, cancellation)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The API returned a non-200 status
    #[error("open-meteo error {status_code}: {reason}")]
    Api { status_code: u16, reason: String },

    /// A 200 response body did not match the expected shape
    #[error("decoding {fragment}: {source}")]
    Decode {
        fragment: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A timestamp in the response failed to parse
    #[error("parsing {field} at index {index}: {message}")]
    Timestamp {
        field: &'static str,
        index: usize,
        message: String,
    },
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn decode(fragment: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { fragment, source }
    }

    pub(crate) fn timestamp(field: &'static str, index: usize, message: impl Into<String>) -> Self {
        Self::Timestamp {
            field,
            index,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
