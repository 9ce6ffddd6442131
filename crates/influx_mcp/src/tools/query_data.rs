//! Flux query tool.

use super::required_str;
use crate::query::run_query;
use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

/// Tool for running Flux queries.
///
/// The annotated CSV answer is returned as one record per row.
pub struct QueryDataTool {
    api: Arc<dyn InfluxApi>,
}

impl QueryDataTool {
    /// Creates the tool over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpTool for QueryDataTool {
    fn name(&self) -> &str {
        "query-data"
    }

    fn description(&self) -> &str {
        "Query data from InfluxDB using Flux. Returns the result rows keyed by column name."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "org": {
                    "type": "string",
                    "description": "The organization name"
                },
                "query": {
                    "type": "string",
                    "description": "Flux query, e.g. from(bucket: \"telemetry\") |> range(start: -1h)"
                }
            },
            "required": ["org", "query"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let org = required_str(&input, "org")?;
        let query = required_str(&input, "query")?;

        let result = run_query(self.api.as_ref(), org, query).await?;
        info!(org, rows = result.row_count, "Query executed");

        serde_json::to_value(&result).map_err(|e| McpError::Extraction(e.to_string()))
    }
}
