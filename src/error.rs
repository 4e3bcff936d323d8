//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// HTTP status code, when the failure came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
///
/// No retries happen at this layer; the next poll tick is the retry.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request never produced a response (connect, timeout, TLS).
    #[cfg(feature = "http")]
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {body}")]
    Request { status: u16, body: String },

    /// The body was not valid JSON or did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
