//! PDF writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::PdfResult;

/// Origin of the text block, in points from the page's bottom-left corner
const TEXT_ORIGIN: (i64, i64) = (100, 750);

/// Font size in points
const FONT_SIZE: i64 = 12;

/// Vertical advance between lines, in points
const LINE_ADVANCE: i64 = 16;

/// PDF writer
///
/// Produces a single A4 page with the input text drawn in Helvetica, one
/// text-showing operation per input line.
pub struct PdfWriter;

impl PdfWriter {
    /// Write text to a PDF file
    pub fn write_file<P: AsRef<Path>>(text: &str, path: P) -> PdfResult<()> {
        let file = File::create(path)?;
        Self::write(text, file)
    }

    /// Write text to a writer
    pub fn write<W: Write>(text: &str, mut writer: W) -> PdfResult<()> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("Td", vec![TEXT_ORIGIN.0.into(), TEXT_ORIGIN.1.into()]),
        ];
        for (i, line) in text.lines().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-LINE_ADVANCE).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        doc.save_to(&mut writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_produces_pdf_header() {
        let mut buf = Vec::new();
        PdfWriter::write("Test content", &mut buf).unwrap();
        assert!(buf.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_write_file_exists_and_is_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");

        PdfWriter::write_file("Test content", &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
