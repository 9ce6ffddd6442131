//! Model Context Protocol (MCP) server for InfluxDB v2.
//!
//! This crate exposes an InfluxDB instance as MCP resources, tools and
//! prompts so that an LLM can discover organizations, buckets and
//! measurements, run Flux queries, write line protocol and provision
//! buckets and organizations.
//!
//! # Features
//!
//! - **Resources**: `influxdb://orgs`, `influxdb://buckets`,
//!   `influxdb://bucket/{bucket}/measurements`, `influxdb://query/{org}/{flux}`
//! - **Tools**: `write-data`, `query-data`, `create-bucket`, `create-org`
//! - **Prompts**: `flux-query-examples`, `line-protocol-guide`
//!
//! Query results arrive as annotated CSV and are normalized with
//! [`influx_mcp_tabular`] before they reach the client.
//!
//! # Usage
//!
//! ```no_run
//! use influx_mcp::{ByteTransport, InfluxRouter, RouterService, Server};
//! use influx_mcp_client::{InfluxClient, InfluxConfig};
//! use std::sync::Arc;
//! use tokio::io::{stdin, stdout};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = InfluxConfig::from_env()?;
//!     let default_org = config.org().clone();
//!     let client = InfluxClient::new(config)?;
//!
//!     let router = InfluxRouter::builder()
//!         .name("influxdb")
//!         .version(env!("CARGO_PKG_VERSION"))
//!         .api(Arc::new(client))
//!         .default_org(default_org)
//!         .build();
//!
//!     let server = Server::new(RouterService(router));
//!     let transport = ByteTransport::new(stdin(), stdout());
//!     server.run(transport).await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod prompts;
mod query;
pub mod resources;
mod server;
pub mod tools;

#[cfg(test)]
mod test_support;

pub use error::{McpError, McpResult};
pub use prompts::{FluxQueryExamplesPrompt, LineProtocolGuidePrompt, McpPrompt, PromptRegistry};
pub use query::{MeasurementList, QueryResult, fetch_measurements, run_query};
pub use resources::{
    BucketsResource, McpResource, MeasurementsResource, OrganizationsResource, QueryResource,
    ResourceInfo, ResourceRegistry,
};
pub use server::{InfluxRouter, InfluxRouterBuilder};
pub use tools::{
    CreateBucketTool, CreateOrgTool, McpTool, QueryDataTool, ToolRegistry, WriteDataTool,
};

// Re-export key mcp-server types for convenience
pub use mcp_server::router::RouterService;
pub use mcp_server::{ByteTransport, Router, Server};
