//! Header-indexed view of an annotated CSV payload.

use crate::TableDialect;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// One data row keyed by trimmed header name.
pub type Record = BTreeMap<String, String>;

/// Annotated CSV with annotation and blank rows removed.
///
/// The header is the first line that is neither empty nor an annotation,
/// wherever it sits in the raw text. Data rows keep their raw, untrimmed
/// fields and may be shorter or longer than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AnnotatedTable {
    /// Parses InfluxDB annotated CSV (`#` annotations, `,` delimiter).
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &TableDialect::default())
    }

    /// Parses annotated text using a custom dialect.
    ///
    /// Never fails: text without a content line yields an empty table.
    #[instrument(skip(text, dialect), fields(bytes = text.len()))]
    pub fn parse_with(text: &str, dialect: &TableDialect) -> Self {
        let mut content = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .filter(|line| !dialect.is_annotation(line));

        let Some(header_line) = content.next() else {
            debug!("No content lines");
            return Self::default();
        };

        let header = header_line
            .split(dialect.delimiter())
            .map(|name| name.trim().to_string())
            .collect::<Vec<_>>();

        let rows = content
            .map(|line| {
                line.split(dialect.delimiter())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        debug!(columns = header.len(), rows = rows.len(), "Parsed annotated table");
        Self { header, rows }
    }

    /// Trimmed column names in source order. Empty when there was no content.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Raw data rows in source order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns true when the payload had no content lines at all.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Position of the first header column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|column| column == name)
    }

    /// Trimmed, non-empty values of `column`, in row order.
    ///
    /// Rows too short to reach the column are skipped, as are rows whose
    /// value is blank. An unknown column yields an empty list.
    pub fn column_values(&self, column: &str) -> Vec<String> {
        let Some(index) = self.column_index(column) else {
            debug!(column, "Column not present in header");
            return Vec::new();
        };

        self.rows
            .iter()
            .map(|row| row.get(index).map(|field| field.trim()).unwrap_or(""))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// One record per data row, mapping header name to trimmed value.
    ///
    /// Columns missing from a short row are absent from its record; fields
    /// beyond the header are dropped. When a header name repeats, the value
    /// from the rightmost column wins.
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| {
                self.header
                    .iter()
                    .zip(row.iter())
                    .map(|(name, field)| (name.clone(), field.trim().to_string()))
                    .collect::<Record>()
            })
            .collect()
    }
}
