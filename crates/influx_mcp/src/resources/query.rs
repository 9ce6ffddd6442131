//! Flux query resource.

use super::{McpResource, decode_component};
use crate::query::{run_query, to_pretty_json};
use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use std::sync::Arc;
use tracing::{debug, instrument};

const PREFIX: &str = "influxdb://query/";

/// Resource exposing the result of a Flux query.
///
/// URI format: `influxdb://query/{org}/{flux}` with both parts percent-encoded.
/// Example: `influxdb://query/acme/buckets()`
pub struct QueryResource {
    api: Arc<dyn InfluxApi>,
}

impl QueryResource {
    /// Creates the resource over an InfluxDB API.
    pub fn new(api: Arc<dyn InfluxApi>) -> Self {
        Self { api }
    }

    /// Parses a query URI into (org, flux).
    fn parse_uri(&self, uri: &str) -> McpResult<(String, String)> {
        let rest = uri.strip_prefix(PREFIX).ok_or_else(|| {
            McpError::ResourceNotFound(format!("Invalid query URI: missing {} prefix", PREFIX))
        })?;

        let (org, flux) = rest.split_once('/').ok_or_else(|| {
            McpError::InvalidInput(format!(
                "Invalid query URI format. Expected {}{{org}}/{{flux}}, got {}",
                PREFIX, uri
            ))
        })?;

        Ok((
            decode_component(org, "organization")?,
            decode_component(flux, "query")?,
        ))
    }
}

#[async_trait]
impl McpResource for QueryResource {
    fn uri_pattern(&self) -> &'static str {
        PREFIX
    }

    fn uri_template(&self) -> &'static str {
        "influxdb://query/{org}/{flux}"
    }

    fn description(&self) -> &'static str {
        "Run a URL-encoded Flux query against an organization"
    }

    #[instrument(skip(self))]
    async fn read(&self, uri: &str) -> McpResult<String> {
        let (org, flux) = self.parse_uri(uri)?;
        debug!(org, flux_len = flux.len(), "Running query resource");

        let result = run_query(self.api.as_ref(), &org, &flux).await?;
        to_pretty_json(&result)
    }
}
