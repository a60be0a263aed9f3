//! # packcheck-pdf
//!
//! PDF generation and text extraction for packcheck.
//!
//! The writer draws each line of the input text on a single page. Text
//! extraction is layout-driven and lossy with respect to whitespace, so
//! callers compare extracted text by containment, not equality.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{PdfError, PdfResult};
pub use reader::PdfReader;
pub use writer::PdfWriter;
