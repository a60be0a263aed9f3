//! # packcheck-csv
//!
//! CSV reader and writer for packcheck.
//!
//! Samples are written as UTF-8 with a byte-order mark by default, matching
//! the encoding the round-trip contract expects; the reader strips a leading
//! BOM before parsing.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;

/// The UTF-8 byte-order mark
pub(crate) const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";
