//! Error types for the InfluxDB MCP server.
//!
//! Every error records the source location where it was created, so log lines
//! point at the call site that gave up rather than at a generic conversion.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod http;
mod tabular;

pub use config::ConfigError;
pub use http::{HttpError, HttpErrorKind};
pub use tabular::{TabularError, TabularErrorKind};

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From, derive_more::Display)]
pub enum InfluxMcpErrorKind {
    /// HTTP exchange with InfluxDB failed
    #[display("{}", _0)]
    Http(HttpError),
    /// Configuration was missing or invalid
    #[display("{}", _0)]
    Config(ConfigError),
    /// Tabular dialect was misconfigured
    #[display("{}", _0)]
    Tabular(TabularError),
}

/// InfluxDB MCP error with kind discrimination.
///
/// # Examples
///
/// ```
/// use influx_mcp_error::{ConfigError, InfluxMcpError, InfluxMcpErrorKind};
///
/// let err = InfluxMcpError::from(ConfigError::new("token is empty"));
/// assert!(matches!(err.kind(), InfluxMcpErrorKind::Config(_)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("InfluxDB MCP Error: {}", _0)]
pub struct InfluxMcpError(#[error(not(source))] Box<InfluxMcpErrorKind>);

impl InfluxMcpError {
    /// Create a new error from a kind.
    pub fn new(kind: InfluxMcpErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InfluxMcpErrorKind {
        &self.0
    }

    /// Returns true when the failure came from talking to InfluxDB.
    pub fn is_upstream(&self) -> bool {
        matches!(self.kind(), InfluxMcpErrorKind::Http(_))
    }
}

impl<T> From<T> for InfluxMcpError
where
    T: Into<InfluxMcpErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for InfluxDB MCP operations.
pub type InfluxMcpResult<T> = std::result::Result<T, InfluxMcpError>;
