//! Organization listing resource.

use super::{McpResource, ResourceInfo};
use crate::McpResult;
use crate::query::to_pretty_json;
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, instrument};

const URI: &str = "influxdb://orgs";

/// Resource listing all organizations.
///
/// URI format: `influxdb://orgs`
pub struct OrganizationsResource {
    api: Arc<dyn InfluxApi>,
}

impl OrganizationsResource {
    /// Creates the resource over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpResource for OrganizationsResource {
    fn uri_pattern(&self) -> &'static str {
        URI
    }

    fn description(&self) -> &'static str {
        "List all organizations in InfluxDB"
    }

    fn matches(&self, uri: &str) -> bool {
        uri == URI
    }

    fn listing(&self) -> Option<ResourceInfo> {
        Some(ResourceInfo {
            uri: URI.to_string(),
            name: "Organizations".to_string(),
            description: self.description().to_string(),
            mime_type: Some("application/json".to_string()),
        })
    }

    #[instrument(skip(self))]
    async fn read(&self, uri: &str) -> McpResult<String> {
        let orgs = self.api.list_organizations().await?;
        debug!(count = orgs.len(), "Listed organizations");

        to_pretty_json(&json!({ "organizations": orgs }))
    }
}
