//! Tabular dialect error types.

/// Kinds of tabular dialect errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TabularErrorKind {
    /// Annotation marker and field delimiter are the same character
    #[display("Annotation marker and delimiter are both {:?}", _0)]
    MarkerIsDelimiter(char),
    /// A line terminator was supplied as marker or delimiter
    #[display("Line terminator {:?} cannot be used as {}", character, role)]
    LineTerminator {
        /// Offending character
        character: char,
        /// Whether it was supplied as "marker" or "delimiter"
        role: &'static str,
    },
}

/// Tabular error with location tracking.
///
/// # Examples
///
/// ```
/// use influx_mcp_error::{TabularError, TabularErrorKind};
///
/// let err = TabularError::new(TabularErrorKind::MarkerIsDelimiter(','));
/// assert!(format!("{}", err).contains("delimiter"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Tabular Error: {} at line {} in {}", kind, line, file)]
pub struct TabularError {
    /// The kind of error that occurred
    pub kind: TabularErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TabularError {
    /// Create a new tabular error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TabularErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
