//! Prelude module - common imports for packcheck users
//!
//! ```rust
//! use packcheck::prelude::*;
//! ```

pub use crate::{
    // Archive types
    Archiver,
    SampleArchive,

    // Codec trait and adapters
    Codec,
    CsvCodec,
    PdfCodec,
    XlsxCodec,

    // Core types
    Content,
    Error,
    Result,
    Table,

    // Fixture types
    member_name,
    SampleDir,
    SampleSet,
    ARCHIVE_NAME,

    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    PdfReader,
    PdfWriter,
    XlsxReader,
    XlsxWriter,

    // Verification
    verify_member,
    verify_samples,
};
