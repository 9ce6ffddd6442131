//! Bucket measurements resource.

use super::{McpResource, decode_component};
use crate::query::{fetch_measurements, to_pretty_json};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use std::sync::Arc;
use tracing::{debug, instrument};

const PREFIX: &str = "influxdb://bucket/";
const SUFFIX: &str = "/measurements";

/// Resource listing the measurements stored in a bucket.
///
/// URI format: `influxdb://bucket/{bucket}/measurements`
/// Example: `influxdb://bucket/telemetry/measurements`
pub struct MeasurementsResource {
    api: Arc<dyn InfluxApi>,
    org: Option<String>,
}

impl MeasurementsResource {
    /// Creates the resource; `org` is the organization queries run against.
    pub fn new(api: Arc<dyn InfluxApi>, org: Option<String>) -> Self {
        Self { api, org }
    }

    /// Parses a measurements URI into a bucket name.
    fn parse_uri(&self, uri: &str) -> McpResult<String> {
        let bucket = uri
            .strip_prefix(PREFIX)
            .ok_or_else(|| {
                McpError::ResourceNotFound(format!("Invalid bucket URI: missing {} prefix", PREFIX))
            })?
            .strip_suffix(SUFFIX)
            .ok_or_else(|| {
                McpError::InvalidInput(format!(
                    "Invalid bucket URI format. Expected {}{{bucket}}{}, got {}",
                    PREFIX, SUFFIX, uri
                ))
            })?;

        decode_component(bucket, "bucket name")
    }
}

#[async_trait]
impl McpResource for MeasurementsResource {
    fn uri_pattern(&self) -> &'static str {
        PREFIX
    }

    fn uri_template(&self) -> &'static str {
        "influxdb://bucket/{bucket}/measurements"
    }

    fn description(&self) -> &'static str {
        "List the measurements stored in a bucket"
    }

    #[instrument(skip(self))]
    async fn read(&self, uri: &str) -> McpResult<String> {
        let bucket = self.parse_uri(uri)?;
        let org = self.org.as_deref().ok_or_else(|| {
            McpError::InvalidInput(
                "No default organization configured; set INFLUXDB_ORG to list measurements"
                    .to_string(),
            )
        })?;
        debug!(bucket, org, "Listing measurements");

        let list = fetch_measurements(self.api.as_ref(), org, &bucket).await?;
        to_pretty_json(&list)
    }
}
