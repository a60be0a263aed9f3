//! PDF text extraction

use std::path::Path;

use crate::error::{PdfError, PdfResult};

/// PDF text extractor
pub struct PdfReader;

impl PdfReader {
    /// Extract the text of a PDF file
    pub fn read_file<P: AsRef<Path>>(path: P) -> PdfResult<String> {
        let bytes = std::fs::read(path)?;
        Self::extract_text(&bytes)
    }

    /// Extract all visible text from PDF bytes
    ///
    /// Extraction reconstructs reading order from the page layout; line
    /// breaks and spacing are approximate.
    pub fn extract_text(bytes: &[u8]) -> PdfResult<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| PdfError::Extract(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::PdfWriter;

    #[test]
    fn test_written_text_is_extractable() {
        let text = "Test content\nCell A2  |  Cell B2";
        let mut buf = Vec::new();
        PdfWriter::write(text, &mut buf).unwrap();

        let extracted = PdfReader::extract_text(&buf).unwrap();
        for line in text.lines() {
            assert!(
                extracted.contains(line.trim()),
                "extracted text {extracted:?} missing line {line:?}"
            );
        }
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(PdfReader::extract_text(b"not a pdf at all").is_err());
    }
}
