//! Bucket provisioning tool.

use super::{optional_str, required_str};
use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::{CreateBucket, InfluxApi, RetentionRule};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Tool for creating buckets.
pub struct CreateBucketTool {
    api: Arc<dyn InfluxApi>,
}

impl CreateBucketTool {
    /// Creates the tool over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpTool for CreateBucketTool {
    fn name(&self) -> &str {
        "create-bucket"
    }

    fn description(&self) -> &str {
        "Create a new bucket in an InfluxDB organization, optionally with a retention period."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The bucket name"
                },
                "orgID": {
                    "type": "string",
                    "description": "The organization ID"
                },
                "retentionPeriodSeconds": {
                    "type": "integer",
                    "description": "Retention period in seconds (omit or 0 for infinite)",
                    "minimum": 0
                },
                "description": {
                    "type": "string",
                    "description": "Optional bucket description"
                }
            },
            "required": ["name", "orgID"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let name = required_str(&input, "name")?;
        let org_id = required_str(&input, "orgID")?;
        let description = optional_str(&input, "description")?;

        let retention = match input.get("retentionPeriodSeconds") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.as_u64().ok_or_else(|| {
                McpError::InvalidInput(
                    "'retentionPeriodSeconds' must be a non-negative integer".to_string(),
                )
            })?),
        };
        let retention_rules = retention
            .filter(|seconds| *seconds > 0)
            .map(|seconds| vec![RetentionRule::expire(seconds)])
            .unwrap_or_default();

        debug!(name, org_id, ?retention, "Creating bucket");
        let request = CreateBucket {
            name: name.to_string(),
            org_id: org_id.to_string(),
            description: description.map(str::to_string),
            retention_rules,
        };

        let bucket = self.api.create_bucket(&request).await?;
        info!(id = %bucket.id, name = %bucket.name, "Bucket created");

        Ok(json!({
            "status": "success",
            "bucket": {
                "id": bucket.id,
                "name": bucket.name,
                "orgID": bucket.org_id,
                "retentionPeriodSeconds": bucket.retention_period_seconds()
            }
        }))
    }
}
