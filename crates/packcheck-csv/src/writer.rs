//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use crate::UTF8_BOM;
use packcheck_core::Table;

/// CSV writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, options)
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        if options.byte_order_mark {
            writer.write_all(UTF8_BOM)?;
        }

        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        for row in table.rows() {
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CsvReadOptions;
    use crate::reader::CsvReader;
    use pretty_assertions::assert_eq;

    fn sample_table() -> Table {
        Table::from_rows([["Header A1", "Header B1"], ["Cell A2", "Cell B2"]])
    }

    #[test]
    fn test_write_emits_bom() {
        let mut buf = Vec::new();
        CsvWriter::write(&sample_table(), &mut buf, &CsvWriteOptions::default()).unwrap();
        assert!(buf.starts_with(UTF8_BOM));
    }

    #[test]
    fn test_write_without_bom() {
        let mut buf = Vec::new();
        let options = CsvWriteOptions {
            byte_order_mark: false,
            ..Default::default()
        };
        CsvWriter::write(&sample_table(), &mut buf, &options).unwrap();
        assert!(buf.starts_with(b"Header A1"));
    }

    #[test]
    fn test_write_read_roundtrip() {
        let table = sample_table();
        let mut buf = Vec::new();
        CsvWriter::write(&table, &mut buf, &CsvWriteOptions::default()).unwrap();

        let read_back = CsvReader::read(buf.as_slice(), &CsvReadOptions::default()).unwrap();
        assert_eq!(read_back, table);
    }

    #[test]
    fn test_write_semicolon_delimiter() {
        let table = Table::from_rows([["Row A2", "Row B2"]]);
        let mut buf = Vec::new();
        let options = CsvWriteOptions {
            delimiter: b';',
            byte_order_mark: false,
            ..Default::default()
        };
        CsvWriter::write(&table, &mut buf, &options).unwrap();
        assert_eq!(buf, b"Row A2;Row B2\r\n");
    }

    #[test]
    fn test_write_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let table = sample_table();
        CsvWriter::write_file(&table, &path, &CsvWriteOptions::default()).unwrap();
        let read_back = CsvReader::read_file(&path, &CsvReadOptions::default()).unwrap();

        assert_eq!(read_back, table);
    }
}
