//! # packcheck
//!
//! Round-trip verification of sample documents through a zip archive.
//!
//! Packcheck generates sample files with known content (CSV, XLSX, PDF),
//! packs them into a zip archive, and verifies that each archive member can
//! be decoded back to the original content — streaming members out of the
//! archive in memory, never extracting them to disk.
//!
//! Each format is abstracted as a [`Codec`]: an `encode(content) -> bytes` /
//! `decode(bytes) -> content` pair wrapping one third-party reader/writer
//! library. The round-trip machinery only talks to the trait, so formats can
//! be added or their backing libraries swapped without touching it.
//!
//! ## Example
//!
//! ```no_run
//! use packcheck::prelude::*;
//!
//! # fn main() -> packcheck::Result<()> {
//! let csv = CsvCodec::new();
//! let xlsx = XlsxCodec;
//! let pdf = PdfCodec;
//! let codecs: [&dyn Codec; 3] = [&csv, &xlsx, &pdf];
//! let samples = SampleSet::default();
//!
//! // Generate one sample file per format and pack them up
//! let mut dir = SampleDir::create("resources")?;
//! dir.generate(&codecs, &samples)?;
//! let archive_path = dir.pack()?;
//!
//! // Read every member back through its codec and compare
//! let mut archive = SampleArchive::open_file(&archive_path)?;
//! verify_samples(&mut archive, &codecs, &samples)?;
//!
//! drop(archive);
//! dir.close()?;
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod codec;
pub mod fixture;
pub mod prelude;
pub mod verify;

pub use archive::{Archiver, SampleArchive};
pub use codec::{CsvCodec, PdfCodec, XlsxCodec};
pub use fixture::{member_name, SampleDir, SampleSet, ARCHIVE_NAME};
pub use verify::{verify_member, verify_samples};

// Re-export core types
pub use packcheck_core::{Codec, Content, Error, Result, Table, SUPPORTED_EXTENSIONS};

// Re-export I/O types
pub use packcheck_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};
pub use packcheck_pdf::{PdfError, PdfReader, PdfWriter};
pub use packcheck_xlsx::{XlsxError, XlsxReader, XlsxWriter};
