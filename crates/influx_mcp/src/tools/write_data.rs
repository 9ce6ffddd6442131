//! Line protocol write tool.

use super::{optional_str, required_str};
use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::{InfluxApi, Precision, WriteRequest};
use serde_json::{Value, json};
use std::str::FromStr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Tool for writing line protocol into a bucket.
pub struct WriteDataTool {
    api: Arc<dyn InfluxApi>,
}

impl WriteDataTool {
    /// Creates the tool over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpTool for WriteDataTool {
    fn name(&self) -> &str {
        "write-data"
    }

    fn description(&self) -> &str {
        "Write time-series data to an InfluxDB bucket in line protocol format. \
         One point per line: measurement,tag=value field=value timestamp"
    }

    fn input_schema(&self) -> Value {
        let precisions: Vec<String> = Precision::iter().map(|p| p.to_string()).collect();
        json!({
            "type": "object",
            "properties": {
                "org": {
                    "type": "string",
                    "description": "The organization name"
                },
                "bucket": {
                    "type": "string",
                    "description": "The bucket name"
                },
                "data": {
                    "type": "string",
                    "description": "Data in InfluxDB line protocol format"
                },
                "precision": {
                    "type": "string",
                    "enum": precisions,
                    "description": "Timestamp precision (default: ns)",
                    "default": "ns"
                }
            },
            "required": ["org", "bucket", "data"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let org = required_str(&input, "org")?;
        let bucket = required_str(&input, "bucket")?;
        let data = required_str(&input, "data")?;
        let precision = match optional_str(&input, "precision")? {
            Some(p) => Precision::from_str(p)
                .map_err(|_| McpError::InvalidInput(format!("Unknown precision '{}'", p)))?,
            None => Precision::default(),
        };

        let lines = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .count();
        debug!(org, bucket, %precision, lines, "Writing line protocol");

        let request = WriteRequest::builder()
            .org(org)
            .bucket(bucket)
            .data(data)
            .precision(precision)
            .build();
        self.api.write(&request).await?;

        info!(bucket, lines, "Data written");
        Ok(json!({
            "status": "success",
            "message": format!("Data written successfully to bucket '{}'", bucket),
            "org": org,
            "bucket": bucket,
            "precision": precision.to_string(),
            "lines": lines
        }))
    }
}
