//! Error types for packcheck-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in packcheck
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive member not found by name
    #[error("Archive member not found: {0}")]
    MemberNotFound(String),

    /// File extension with no registered codec
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Content payload of the wrong kind for an operation
    #[error("Invalid content kind: expected {expected}, got {actual}")]
    InvalidContentKind {
        expected: &'static str,
        actual: &'static str,
    },

    /// Decoded content differs from the expected content
    #[error("Content mismatch in {member}: {detail}")]
    Mismatch { member: String, detail: String },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
