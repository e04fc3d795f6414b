//! Error types for the cache layer and resource loaders
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Storage Error Enum ==
/// Errors raised by a persistent storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend is full and refused the write.
    ///
    /// Distinguished from other failures because the cache runs a
    /// sweep-and-retry recovery pass for it on the write path.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// No storage backend is available in this execution context
    #[error("storage unavailable")]
    Unavailable,

    /// Any other backend failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

// == Fetch Error Enum ==
/// Errors surfaced by the resource loader layer.
///
/// Transport failures and malformed responses are kept distinct: a wrong
/// response shape is never confused with a network failure, and is never
/// written to the cache.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The backend answered with a non-success status code
    #[error("request failed with status {status}")]
    Http { status: u16 },

    /// The request could not be completed at the transport level
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected resource shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Http {
                status: status.as_u16(),
            },
            None => FetchError::Transport(err.to_string()),
        }
    }
}
