//! Organization provisioning tool.

use super::{optional_str, required_str};
use crate::McpResult;
use crate::tools::McpTool;
use async_trait::async_trait;
use influx_mcp_client::{CreateOrganization, InfluxApi};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument};

/// Tool for creating organizations.
pub struct CreateOrgTool {
    api: Arc<dyn InfluxApi>,
}

impl CreateOrgTool {
    /// Creates the tool over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpTool for CreateOrgTool {
    fn name(&self) -> &str {
        "create-org"
    }

    fn description(&self) -> &str {
        "Create a new InfluxDB organization."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The organization name"
                },
                "description": {
                    "type": "string",
                    "description": "Optional organization description"
                }
            },
            "required": ["name"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let name = required_str(&input, "name")?;
        let request = CreateOrganization {
            name: name.to_string(),
            description: optional_str(&input, "description")?.map(str::to_string),
        };

        let org = self.api.create_organization(&request).await?;
        info!(id = %org.id, name = %org.name, "Organization created");

        Ok(json!({
            "status": "success",
            "organization": org
        }))
    }
}
