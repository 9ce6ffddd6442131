//! Bucket listing resource.

use super::{McpResource, ResourceInfo};
use crate::McpResult;
use crate::query::to_pretty_json;
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

const URI: &str = "influxdb://buckets";

/// Resource listing all buckets.
///
/// URI format: `influxdb://buckets`
pub struct BucketsResource {
    api: Arc<dyn InfluxApi>,
}

impl BucketsResource {
    /// Creates the resource over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl McpResource for BucketsResource {
    fn uri_pattern(&self) -> &'static str {
        URI
    }

    fn description(&self) -> &'static str {
        "List all buckets in InfluxDB"
    }

    fn matches(&self, uri: &str) -> bool {
        uri == URI
    }

    fn listing(&self) -> Option<ResourceInfo> {
        Some(ResourceInfo {
            uri: URI.to_string(),
            name: "Buckets".to_string(),
            description: self.description().to_string(),
            mime_type: Some("application/json".to_string()),
        })
    }

    #[instrument(skip(self))]
    async fn read(&self, uri: &str) -> McpResult<String> {
        let buckets = self.api.list_buckets().await?;
        debug!(count = buckets.len(), "Listed buckets");

        let buckets: Vec<Value> = buckets
            .iter()
            .map(|bucket| {
                json!({
                    "id": bucket.id,
                    "name": bucket.name,
                    "orgID": bucket.org_id,
                    "retentionPeriodSeconds": bucket.retention_period_seconds()
                })
            })
            .collect();

        to_pretty_json(&json!({ "buckets": buckets }))
    }
}
