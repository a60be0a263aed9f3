//! PDF error types

use thiserror::Error;

/// Result type for PDF operations
pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying lopdf library returned an error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Text extraction failed
    #[error("Text extraction failed: {0}")]
    Extract(String),
}
