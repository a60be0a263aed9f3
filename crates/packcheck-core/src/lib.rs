//! # packcheck-core
//!
//! Core data structures for the packcheck archive round-trip library.
//!
//! This crate provides the fundamental types used throughout packcheck:
//! - [`Table`] - An ordered grid of string cells (the tabular sample payload)
//! - [`Content`] - A format payload: a table, or a block of text
//! - [`Codec`] - The `encode(content) -> bytes` / `decode(bytes) -> content`
//!   capability pair every supported file format is abstracted behind
//! - [`Error`] and [`Result`] - The shared error type
//!
//! ## Example
//!
//! ```rust
//! use packcheck_core::{Content, Table};
//!
//! let mut table = Table::new();
//! table.push_row(vec!["Header A1".into(), "Header B1".into()]);
//! table.push_row(vec!["Cell A2".into(), "Cell B2".into()]);
//!
//! let content = Content::Table(table);
//! assert_eq!(content.kind(), "table");
//! assert_eq!(content.as_table().unwrap().cell(1, 0), Some("Cell A2"));
//! ```

pub mod codec;
pub mod content;
pub mod error;
pub mod table;

// Re-exports for convenience
pub use codec::Codec;
pub use content::Content;
pub use error::{Error, Result};
pub use table::Table;

/// File extensions recognized when collecting sample files for archiving.
///
/// Matching is case-insensitive at the collection site.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "pdf"];
