//! HTTP error types.

/// Kinds of failures when talking to the InfluxDB HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpErrorKind {
    /// Request could not be sent or no response arrived (DNS, refused, timeout)
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// InfluxDB answered with a non-success status
    #[display("HTTP {}: {}", status, body)]
    Status {
        /// Status code returned by InfluxDB
        status: u16,
        /// Response body, usually a JSON error document
        body: String,
    },
    /// Response body could not be read or decoded
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// HTTP error with location tracking.
///
/// # Examples
///
/// ```
/// use influx_mcp_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::Status {
///     status: 401,
///     body: "unauthorized access".to_string(),
/// });
/// assert_eq!(err.status(), Some(401));
/// assert!(format!("{}", err).contains("unauthorized"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The kind of error that occurred
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Status code, when InfluxDB answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            HttpErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
