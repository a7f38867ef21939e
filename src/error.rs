//! Error types for colour retrieval.

use thiserror::Error;

/// Why a retrieval produced no collection.
///
/// The loader never surfaces these to the user; they exist so sources can use
/// `?` and so the failure shows up in the log.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Network or transport failure before a response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not `{ "colours": [...] }`
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RetrievalError {
    /// Create a transport error with a message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Whether the data source was reached but sent something unusable.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}
