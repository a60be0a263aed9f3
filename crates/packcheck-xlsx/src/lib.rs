//! # packcheck-xlsx
//!
//! Minimal XLSX (Office Open XML) reader and writer for packcheck.
//!
//! The writer emits the smallest workbook a spreadsheet application will
//! open: one sheet, every cell an inline string. The reader handles inline
//! strings, shared strings, and raw values, which covers files written by
//! this crate as well as workbooks saved by common spreadsheet tools.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;
