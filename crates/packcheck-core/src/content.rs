//! Content payload type

use crate::table::Table;

/// The payload carried by one sample file.
///
/// Tabular formats (CSV, XLSX) carry a [`Table`]; the text format (PDF)
/// carries a single string.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Rows of string cells
    Table(Table),
    /// A block of text
    Text(String),
}

impl Content {
    /// Short name of the payload kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Table(_) => "table",
            Content::Text(_) => "text",
        }
    }

    /// The table payload, if this is tabular content
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Content::Table(table) => Some(table),
            Content::Text(_) => None,
        }
    }

    /// The text payload, if this is text content
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Table(_) => None,
        }
    }
}

impl From<Table> for Content {
    fn from(table: Table) -> Self {
        Content::Table(table)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_accessors() {
        let table = Content::Table(Table::from_rows([["a"]]));
        assert_eq!(table.kind(), "table");
        assert!(table.as_table().is_some());
        assert!(table.as_text().is_none());

        let text = Content::from("hello");
        assert_eq!(text.kind(), "text");
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_table().is_none());
    }
}
