//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use packcheck_core::Table;

/// XLSX reader
///
/// Reads the first worksheet of a workbook into a [`Table`]. Cell values are
/// kept as their literal text; numbers are not reparsed.
pub struct XlsxReader;

impl XlsxReader {
    /// Read a table from an XLSX file
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Table> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a table from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Table> {
        let mut archive = zip::ZipArchive::new(reader)?;

        // Verify this is an XLSX file
        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let shared_strings = Self::read_shared_strings(&mut archive)?;

        // Resolve the first sheet's part path
        let sheet_info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let (_, r_id) = sheet_info
            .first()
            .ok_or_else(|| XlsxError::InvalidFormat("Workbook has no sheets".into()))?;
        let target = sheet_paths
            .get(r_id)
            .ok_or_else(|| XlsxError::MissingPart(format!("worksheet part for {r_id}")))?;
        let sheet_path = format!("xl/{}", target.trim_start_matches('/'));

        Self::read_worksheet(&mut archive, &sheet_path, &shared_strings)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<String>> {
        let mut strings = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(strings), // No shared strings is valid
        };

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut current_string = String::new();
        let mut in_si = false;
        let mut in_t = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_string.clear();
                    }
                    b"t" if in_si => {
                        in_t = true;
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(current_string.clone());
                        current_string.clear();
                        in_si = false;
                    }
                    b"t" => {
                        in_t = false;
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    if let Ok(text) = e.unescape() {
                        current_string.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(strings)
    }

    /// Read workbook.xml to get sheet names and rIds
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    let mut name = None;
                    let mut r_id = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"name" => {
                                name = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"r:id" => {
                                r_id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(name), Some(r_id)) = (name, r_id) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to get rId -> part path mappings
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let mut id = None;
                    let mut target = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Id" => {
                                id = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"Target" => {
                                target = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    if let (Some(id), Some(target)) = (id, target) {
                        rels.insert(id, target);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Parse one worksheet part into a table
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        shared_strings: &[String],
    ) -> XlsxResult<Table> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let reader = BufReader::new(file);
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut table = Table::new();

        // State for the cell currently being parsed
        let mut cell_pos: Option<(usize, usize)> = None;
        let mut cell_type = CellType::Value;
        let mut captured = String::new();
        let mut has_value = false;
        let mut in_v = false;
        let mut in_is = false;
        let mut in_t = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == b"c" => {
                    let mut reference = None;
                    let mut type_attr = None;

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"r" => {
                                reference = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            b"t" => {
                                type_attr = attr.unescape_value().ok().map(|s| s.to_string());
                            }
                            _ => {}
                        }
                    }

                    let reference = reference
                        .ok_or_else(|| XlsxError::Parse("Cell without r attribute".into()))?;
                    cell_pos = Some(parse_cell_ref(&reference)?);
                    cell_type = CellType::from_attr(type_attr.as_deref());
                    captured.clear();
                    has_value = false;
                }
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"v" if cell_pos.is_some() => {
                        in_v = true;
                        has_value = true;
                    }
                    b"is" if cell_pos.is_some() => {
                        in_is = true;
                        has_value = true;
                    }
                    b"t" if in_is => in_t = true,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_v || in_t => {
                    if let Ok(text) = e.unescape() {
                        captured.push_str(&text);
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"v" => in_v = false,
                    b"t" => in_t = false,
                    b"is" => in_is = false,
                    b"c" => {
                        if let Some((row, col)) = cell_pos.take() {
                            if has_value {
                                let value =
                                    Self::resolve_value(&cell_type, &captured, shared_strings);
                                table.set_cell(row, col, value);
                            }
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(table)
    }

    fn resolve_value(cell_type: &CellType, raw: &str, shared_strings: &[String]) -> String {
        match cell_type {
            CellType::SharedString => {
                match raw.parse::<usize>().ok().and_then(|i| shared_strings.get(i)) {
                    Some(s) => s.clone(),
                    None => {
                        log::warn!("Shared string index {raw} out of range");
                        String::new()
                    }
                }
            }
            CellType::Boolean => {
                if raw == "1" {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            CellType::InlineString | CellType::FormulaString | CellType::Value => raw.to_string(),
        }
    }
}

/// Recognized values of the cell `t` attribute
enum CellType {
    /// Numeric or untyped `<v>` content
    Value,
    /// `t="s"` - index into the shared strings table
    SharedString,
    /// `t="inlineStr"` - string inline in `<is><t>`
    InlineString,
    /// `t="str"` - formula result string
    FormulaString,
    /// `t="b"` - boolean
    Boolean,
}

impl CellType {
    fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            None | Some("n") => CellType::Value,
            Some("s") => CellType::SharedString,
            Some("inlineStr") => CellType::InlineString,
            Some("str") => CellType::FormulaString,
            Some("b") => CellType::Boolean,
            Some(other) => {
                log::warn!("Unrecognized cell type {other:?}, treating as raw value");
                CellType::Value
            }
        }
    }
}

/// Parse an `A1`-style cell reference into zero-based (row, col) indices
fn parse_cell_ref(reference: &str) -> XlsxResult<(usize, usize)> {
    let letters_end = reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| XlsxError::Parse(format!("Invalid cell reference: {reference}")))?;
    let (letters, digits) = reference.split_at(letters_end);

    if letters.is_empty() {
        return Err(XlsxError::Parse(format!(
            "Invalid cell reference: {reference}"
        )));
    }

    let mut col = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_uppercase() {
            return Err(XlsxError::Parse(format!(
                "Invalid cell reference: {reference}"
            )));
        }
        col = col * 26 + (c as usize - 'A' as usize + 1);
    }

    let row: usize = digits
        .parse()
        .map_err(|_| XlsxError::Parse(format!("Invalid cell reference: {reference}")))?;
    if row == 0 {
        return Err(XlsxError::Parse(format!(
            "Invalid cell reference: {reference}"
        )));
    }

    Ok((row - 1, col - 1))
}
