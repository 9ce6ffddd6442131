//! Annotated CSV dialect.

use influx_mcp_error::{TabularError, TabularErrorKind};

/// Marker that starts an annotation row in InfluxDB annotated CSV.
pub const DEFAULT_ANNOTATION_MARKER: char = '#';

/// Field separator in InfluxDB annotated CSV.
pub const DEFAULT_DELIMITER: char = ',';

/// Characters that distinguish annotation rows and separate fields.
///
/// A dialect is always valid once constructed, so parsing never has to
/// re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableDialect {
    marker: char,
    delimiter: char,
}

impl TableDialect {
    /// Creates a dialect with a custom annotation marker and delimiter.
    ///
    /// # Errors
    ///
    /// Fails when the marker equals the delimiter, or when either is `\n` or
    /// `\r`, since such a dialect cannot tell rows, fields and annotations
    /// apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use influx_mcp_tabular::TableDialect;
    ///
    /// assert!(TableDialect::new('%', ';').is_ok());
    /// assert!(TableDialect::new(',', ',').is_err());
    /// ```
    #[track_caller]
    pub fn new(marker: char, delimiter: char) -> Result<Self, TabularError> {
        for (character, role) in [(marker, "marker"), (delimiter, "delimiter")] {
            if character == '\n' || character == '\r' {
                return Err(TabularError::new(TabularErrorKind::LineTerminator {
                    character,
                    role,
                }));
            }
        }
        if marker == delimiter {
            return Err(TabularError::new(TabularErrorKind::MarkerIsDelimiter(
                marker,
            )));
        }
        Ok(Self { marker, delimiter })
    }

    /// Annotation marker.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub(crate) fn is_annotation(&self, line: &str) -> bool {
        line.starts_with(self.marker)
    }
}

impl Default for TableDialect {
    fn default() -> Self {
        Self {
            marker: DEFAULT_ANNOTATION_MARKER,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialect() {
        let dialect = TableDialect::default();
        assert_eq!(dialect.marker(), '#');
        assert_eq!(dialect.delimiter(), ',');
    }

    #[test]
    fn test_rejects_marker_equal_to_delimiter() {
        let err = TableDialect::new(';', ';').unwrap_err();
        assert_eq!(err.kind, TabularErrorKind::MarkerIsDelimiter(';'));
    }

    #[test]
    fn test_rejects_line_terminators() {
        let err = TableDialect::new('\n', ',').unwrap_err();
        assert!(matches!(
            err.kind,
            TabularErrorKind::LineTerminator { role: "marker", .. }
        ));

        let err = TableDialect::new('#', '\r').unwrap_err();
        assert!(matches!(
            err.kind,
            TabularErrorKind::LineTerminator {
                role: "delimiter",
                ..
            }
        ));
    }

    #[test]
    fn test_is_annotation_checks_first_character_only() {
        let dialect = TableDialect::default();
        assert!(dialect.is_annotation("#datatype,string,long"));
        assert!(!dialect.is_annotation(" #datatype"));
        assert!(!dialect.is_annotation(",result,#table"));
    }
}
