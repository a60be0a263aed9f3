//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use crate::UTF8_BOM;
use packcheck_core::Table;

/// CSV reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a table
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Table> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a table
    ///
    /// Every record becomes one row of string cells; there is no header
    /// handling, so the header line (if any) is row 0. A leading UTF-8
    /// byte-order mark is stripped.
    pub fn read<R: Read>(mut reader: R, options: &CsvReadOptions) -> CsvResult<Table> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;

        let bytes = data.strip_prefix(UTF8_BOM).unwrap_or(&data);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut table = Table::new();
        for result in csv_reader.records() {
            let record = result?;
            table.push_row(record.iter().map(str::to_string).collect());
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_strips_bom() {
        let bytes = b"\xef\xbb\xbfHeader A1,Header B1\r\nCell A2,Cell B2\r\n";
        let table = CsvReader::read(&bytes[..], &CsvReadOptions::default()).unwrap();

        assert_eq!(table.cell(0, 0), Some("Header A1"));
        assert_eq!(table.cell(1, 1), Some("Cell B2"));
    }

    #[test]
    fn test_read_without_bom() {
        let bytes = b"a,b\r\nc,d\r\n";
        let table = CsvReader::read(&bytes[..], &CsvReadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), Some("a"));
    }

    #[test]
    fn test_read_semicolon_delimiter() {
        let bytes = b"Row A2;Row B2\r\n";
        let options = CsvReadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let table = CsvReader::read(&bytes[..], &options).unwrap();
        assert_eq!(table.row(0).unwrap(), ["Row A2", "Row B2"]);
    }

    #[test]
    fn test_comma_reader_does_not_split_semicolon_bytes() {
        // The delimiter is a real coupling: semicolon bytes read with a
        // comma-aware reader come back as a single cell.
        let bytes = b"Row A2;Row B2\r\n";
        let table = CsvReader::read(&bytes[..], &CsvReadOptions::default()).unwrap();
        assert_eq!(table.row(0).unwrap(), ["Row A2;Row B2"]);
    }

    #[test]
    fn test_read_quoted_fields() {
        let bytes = b"\"a,b\",c\r\n";
        let table = CsvReader::read(&bytes[..], &CsvReadOptions::default()).unwrap();
        assert_eq!(table.row(0).unwrap(), ["a,b", "c"]);
    }
}
