//! MCP tool system.
//!
//! Tools are functions LLMs can call. Each tool declares a JSON schema for
//! its arguments and returns a JSON value on success.

use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

mod create_bucket;
mod create_org;
mod query_data;
mod write_data;

pub use create_bucket::CreateBucketTool;
pub use create_org::CreateOrgTool;
pub use query_data::QueryDataTool;
pub use write_data::WriteDataTool;

/// MCP tool that LLMs can call.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name as exposed to the client
    fn name(&self) -> &str;

    /// Tool description for LLM
    fn description(&self) -> &str;

    /// JSON schema of the arguments
    fn input_schema(&self) -> Value;

    /// Executes the tool
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry for MCP tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<Vec<Arc<dyn McpTool>>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every InfluxDB tool.
    pub fn with_defaults(api: Arc<dyn InfluxApi>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(WriteDataTool::new(api.clone())));
        registry.register(Arc::new(QueryDataTool::new(api.clone())));
        registry.register(Arc::new(CreateBucketTool::new(api.clone())));
        registry.register(Arc::new(CreateOrgTool::new(api)));
        registry
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        Arc::make_mut(&mut self.tools).push(tool);
    }

    /// Lists all tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.as_ref().clone()
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.iter().find(|tool| tool.name() == name).cloned()
    }

    /// Executes a tool by name.
    #[instrument(skip(self, input))]
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;
        debug!(tool = name, "Tool matched");
        tool.execute(input).await
    }
}

/// Reads a required, non-empty string argument.
fn required_str<'a>(input: &'a Value, field: &str) -> McpResult<&'a str> {
    input
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| McpError::InvalidInput(format!("Missing '{}' field", field)))
}

/// Reads an optional string argument, rejecting non-string values.
fn optional_str<'a>(input: &'a Value, field: &str) -> McpResult<Option<&'a str>> {
    match input.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(Some)
            .ok_or_else(|| McpError::InvalidInput(format!("'{}' must be a string", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_str() {
        let input = json!({ "org": "acme", "blank": "  ", "number": 3 });
        assert_eq!(required_str(&input, "org").unwrap(), "acme");
        assert!(required_str(&input, "blank").is_err());
        assert!(required_str(&input, "number").is_err());
        assert!(required_str(&input, "missing").is_err());
    }

    #[test]
    fn test_optional_str() {
        let input = json!({ "a": "x", "b": null, "c": 1 });
        assert_eq!(optional_str(&input, "a").unwrap(), Some("x"));
        assert_eq!(optional_str(&input, "b").unwrap(), None);
        assert_eq!(optional_str(&input, "missing").unwrap(), None);
        assert!(optional_str(&input, "c").is_err());
    }
}
