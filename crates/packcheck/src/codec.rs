//! Codec adapters
//!
//! One [`Codec`] implementation per supported format, each delegating to its
//! format crate and mapping the crate-local error into the shared [`Error`].

use std::io::Cursor;

use packcheck_core::{Codec, Content, Error, Result, Table};
use packcheck_csv::{CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
use packcheck_pdf::{PdfReader, PdfWriter};
use packcheck_xlsx::{XlsxReader, XlsxWriter};

fn expect_table(content: &Content) -> Result<&Table> {
    content.as_table().ok_or(Error::InvalidContentKind {
        expected: "table",
        actual: content.kind(),
    })
}

fn expect_text(content: &Content) -> Result<&str> {
    content.as_text().ok_or(Error::InvalidContentKind {
        expected: "text",
        actual: content.kind(),
    })
}

/// CSV codec
///
/// Carries a matched pair of read/write options so the delimiter used for
/// encoding is the one assumed when decoding.
#[derive(Debug, Clone, Default)]
pub struct CsvCodec {
    /// Options applied when decoding
    pub read_options: CsvReadOptions,
    /// Options applied when encoding
    pub write_options: CsvWriteOptions,
}

impl CsvCodec {
    /// Codec with default options (comma delimiter, BOM on write)
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec pair for a non-default delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            read_options: CsvReadOptions {
                delimiter,
                ..Default::default()
            },
            write_options: CsvWriteOptions {
                delimiter,
                ..Default::default()
            },
        }
    }
}

impl Codec for CsvCodec {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn encode(&self, content: &Content) -> Result<Vec<u8>> {
        let table = expect_table(content)?;
        let mut buf = Vec::new();
        CsvWriter::write(table, &mut buf, &self.write_options)
            .map_err(|e| Error::other(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Content> {
        let table =
            CsvReader::read(bytes, &self.read_options).map_err(|e| Error::other(e.to_string()))?;
        Ok(Content::Table(table))
    }
}

/// XLSX codec
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl Codec for XlsxCodec {
    fn extension(&self) -> &'static str {
        "xlsx"
    }

    fn encode(&self, content: &Content) -> Result<Vec<u8>> {
        let table = expect_table(content)?;
        let mut buf = Vec::new();
        XlsxWriter::write(table, Cursor::new(&mut buf))
            .map_err(|e| Error::other(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Content> {
        let table =
            XlsxReader::read(Cursor::new(bytes)).map_err(|e| Error::other(e.to_string()))?;
        Ok(Content::Table(table))
    }
}

/// PDF codec
///
/// `decode` returns the *extracted* page text, which preserves the drawn
/// content but not its exact whitespace; compare by containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfCodec;

impl Codec for PdfCodec {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn encode(&self, content: &Content) -> Result<Vec<u8>> {
        let text = expect_text(content)?;
        let mut buf = Vec::new();
        PdfWriter::write(text, &mut buf).map_err(|e| Error::other(e.to_string()))?;
        Ok(buf)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Content> {
        let text = PdfReader::extract_text(bytes).map_err(|e| Error::other(e.to_string()))?;
        Ok(Content::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> Table {
        Table::from_rows([["Header A1", "Header B1"], ["Cell A2", "Cell B2"]])
    }

    #[test]
    fn test_csv_codec_roundtrip() {
        let codec = CsvCodec::new();
        let content = Content::Table(sample_table());

        let bytes = codec.encode(&content).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        assert_eq!(decoded, content);
    }

    #[test]
    fn test_xlsx_codec_roundtrip() {
        let codec = XlsxCodec;
        let content = Content::Table(sample_table());

        let bytes = codec.encode(&content).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        assert_eq!(decoded, content);
    }

    #[test]
    fn test_pdf_codec_decode_contains_lines() {
        let codec = PdfCodec;
        let text = "Test content\nCell A2  |  Cell B2";

        let bytes = codec.encode(&Content::from(text)).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        let extracted = decoded.as_text().unwrap();
        assert!(extracted.contains("Test content"));
        assert!(extracted.contains("Cell A2  |  Cell B2"));
    }

    #[test]
    fn test_table_codec_rejects_text() {
        let codec = CsvCodec::new();
        match codec.encode(&Content::from("not a table")) {
            Err(Error::InvalidContentKind { expected, actual }) => {
                assert_eq!(expected, "table");
                assert_eq!(actual, "text");
            }
            other => panic!("expected InvalidContentKind, got {other:?}"),
        }
    }

    #[test]
    fn test_text_codec_rejects_table() {
        let codec = PdfCodec;
        match codec.encode(&Content::Table(sample_table())) {
            Err(Error::InvalidContentKind { expected, actual }) => {
                assert_eq!(expected, "text");
                assert_eq!(actual, "table");
            }
            other => panic!("expected InvalidContentKind, got {other:?}"),
        }
    }
}
