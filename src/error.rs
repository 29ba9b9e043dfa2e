use std::path::PathBuf;

use thiserror::Error;

pub type PlaygroundResult<T> = Result<T, PlaygroundError>;

#[derive(Debug, Error)]
pub enum PlaygroundError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },
}

/// Failure category for outbound calls that could not complete.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out after {timeout_ms} ms")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The exchange completed but the body could not be read as JSON.
    #[error("{url} returned a body that is not json: {message}")]
    Body { url: String, message: String },
}

impl TransportError {
    /// HTTP status carried by the failure, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            Self::Timeout { .. } | Self::Unavailable(_) | Self::Body { .. } => None,
        }
    }
}
