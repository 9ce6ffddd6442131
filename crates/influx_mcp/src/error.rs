//! Errors surfaced to MCP clients.

use influx_mcp_error::{InfluxMcpError, InfluxMcpErrorKind};
use mcp_spec::handler::{ResourceError, ToolError};

/// Failure of a tool call or resource read.
///
/// The display prefix tells the client which stage failed: a bad request,
/// the InfluxDB call itself, or turning its answer into a result.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum McpError {
    /// Arguments or URI were missing or malformed
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),
    /// No tool is registered under this name
    #[display("Tool not found: {}", _0)]
    ToolNotFound(String),
    /// No resource handler matches this URI
    #[display("Resource not found: {}", _0)]
    ResourceNotFound(String),
    /// No prompt is registered under this name
    #[display("Prompt not found: {}", _0)]
    PromptNotFound(String),
    /// InfluxDB could not be reached or rejected the request
    #[display("InfluxDB request failed: {}", _0)]
    Upstream(String),
    /// InfluxDB answered but the answer could not be turned into a result
    #[display("Result extraction failed: {}", _0)]
    Extraction(String),
}

impl std::error::Error for McpError {}

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

impl From<InfluxMcpError> for McpError {
    fn from(err: InfluxMcpError) -> Self {
        match err.kind() {
            InfluxMcpErrorKind::Http(e) => McpError::Upstream(e.kind.to_string()),
            InfluxMcpErrorKind::Config(e) => McpError::InvalidInput(e.message.clone()),
            InfluxMcpErrorKind::Tabular(e) => McpError::Extraction(e.kind.to_string()),
        }
    }
}

impl From<McpError> for ToolError {
    fn from(err: McpError) -> Self {
        match err {
            McpError::InvalidInput(_) => ToolError::InvalidParameters(err.to_string()),
            McpError::ToolNotFound(_) => ToolError::NotFound(err.to_string()),
            _ => ToolError::ExecutionError(err.to_string()),
        }
    }
}

impl From<McpError> for ResourceError {
    fn from(err: McpError) -> Self {
        match err {
            McpError::ResourceNotFound(_) => ResourceError::NotFound(err.to_string()),
            _ => ResourceError::ExecutionError(err.to_string()),
        }
    }
}
