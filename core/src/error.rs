//! Error types for the Rapportive client.
//!
//! # Design
//! `RateLimited` gets a dedicated variant so callers can back off on HTTP 429
//! without inspecting a status code. Every other non-200 response lands in
//! `UnexpectedStatus` with the raw status code and body for debugging.
//! Network-level failures keep their source error in `Transport`.

use thiserror::Error;

/// Result type for Rapportive client operations.
pub type Result<T> = std::result::Result<T, RapportiveError>;

/// Errors returned by `RapportiveClient` parse methods and `Transport`s.
#[derive(Debug, Error)]
pub enum RapportiveError {
    /// The request never produced an HTTP response (connect, TLS, I/O).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a status other than 200 (and not 429 on the
    /// contacts endpoint).
    #[error("bad response status: {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The contacts endpoint returned 429.
    #[error("rate limit error")]
    RateLimited,

    /// A 200 response body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl RapportiveError {
    /// Wrap any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RapportiveError::Transport(Box::new(err))
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RapportiveError::UnexpectedStatus { status, .. } => Some(*status),
            RapportiveError::RateLimited => Some(429),
            _ => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, RapportiveError::RateLimited)
    }
}
