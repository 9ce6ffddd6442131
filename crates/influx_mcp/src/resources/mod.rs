//! MCP resource system.
//!
//! Resources are data sources that LLMs can read. They follow URI patterns like:
//! - `influxdb://orgs` - All organizations
//! - `influxdb://buckets` - All buckets
//! - `influxdb://bucket/telemetry/measurements` - Measurements in a bucket
//! - `influxdb://query/acme/from(bucket%3A%22telemetry%22)` - Flux query result

use crate::{McpError, McpResult};
use async_trait::async_trait;
use influx_mcp_client::InfluxApi;
use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tracing::{debug, instrument};

mod buckets;
mod measurements;
mod organizations;
mod query;

pub use buckets::BucketsResource;
pub use measurements::MeasurementsResource;
pub use organizations::OrganizationsResource;
pub use query::QueryResource;

/// MCP resource that LLMs can read.
#[async_trait]
pub trait McpResource: Send + Sync {
    /// URI prefix this resource handles (e.g., "influxdb://bucket/")
    fn uri_pattern(&self) -> &'static str;

    /// URI template shown to clients
    fn uri_template(&self) -> &'static str {
        self.uri_pattern()
    }

    /// Resource description for LLM
    fn description(&self) -> &'static str;

    /// Check if this resource handles the given URI
    fn matches(&self, uri: &str) -> bool {
        uri.starts_with(self.uri_pattern())
    }

    /// Concrete resource to advertise in listings, for URIs without parameters
    fn listing(&self) -> Option<ResourceInfo> {
        None
    }

    /// Read resource content
    async fn read(&self, uri: &str) -> McpResult<String>;
}

/// Information about a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    /// Resource URI
    pub uri: String,
    /// Resource name
    pub name: String,
    /// Resource description
    pub description: String,
    /// MIME type (optional)
    pub mime_type: Option<String>,
}

/// Registry for MCP resources.
#[derive(Clone, Default)]
pub struct ResourceRegistry {
    resources: Arc<Vec<Arc<dyn McpResource>>>,
}

impl ResourceRegistry {
    /// Creates an empty resource registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every InfluxDB resource.
    ///
    /// `default_org` is the organization used to list bucket measurements.
    pub fn with_defaults(api: Arc<dyn InfluxApi>, default_org: Option<String>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(OrganizationsResource::new(api.clone())));
        registry.register(Arc::new(BucketsResource::new(api.clone())));
        registry.register(Arc::new(MeasurementsResource::new(api.clone(), default_org)));
        registry.register(Arc::new(QueryResource::new(api)));
        registry
    }

    /// Registers a resource.
    pub fn register(&mut self, resource: Arc<dyn McpResource>) {
        Arc::make_mut(&mut self.resources).push(resource);
    }

    /// Lists all resources.
    pub fn list(&self) -> Vec<Arc<dyn McpResource>> {
        self.resources.as_ref().clone()
    }

    /// Concrete resources that can be advertised without parameters.
    pub fn listings(&self) -> Vec<ResourceInfo> {
        self.resources
            .iter()
            .filter_map(|resource| resource.listing())
            .collect()
    }

    /// Reads a resource by URI.
    #[instrument(skip(self))]
    pub async fn read(&self, uri: &str) -> McpResult<String> {
        for resource in self.resources.as_ref() {
            if resource.matches(uri) {
                debug!(uri, pattern = %resource.uri_pattern(), "Resource matched");
                return resource.read(uri).await;
            }
        }

        Err(McpError::ResourceNotFound(format!(
            "No resource handler for URI: {}",
            uri
        )))
    }
}

/// Percent-decodes one URI component.
fn decode_component(component: &str, what: &str) -> McpResult<String> {
    let decoded = percent_decode_str(component)
        .decode_utf8()
        .map_err(|e| McpError::InvalidInput(format!("Invalid {} encoding: {}", what, e)))?
        .into_owned();

    if decoded.trim().is_empty() {
        return Err(McpError::InvalidInput(format!("Empty {} in URI", what)));
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("my%20bucket", "bucket").unwrap(), "my bucket");
        assert_eq!(decode_component("plain", "bucket").unwrap(), "plain");
        assert!(decode_component("", "bucket").is_err());
        assert!(decode_component("%20", "bucket").is_err());
        assert!(decode_component("%FF", "bucket").is_err());
    }

    #[tokio::test]
    async fn test_unknown_uri() {
        let registry = ResourceRegistry::new();
        let err = registry.read("influxdb://nothing").await.unwrap_err();
        assert!(matches!(err, McpError::ResourceNotFound(_)));
    }
}
