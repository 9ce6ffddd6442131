//! Operations the MCP layer needs from InfluxDB.

use crate::{Bucket, CreateBucket, CreateOrganization, Health, Organization, WriteRequest};
use async_trait::async_trait;
use influx_mcp_error::InfluxMcpResult;

/// Raw response of a Flux query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    /// HTTP status code
    pub status: u16,
    /// Annotated CSV body
    pub body: String,
}

impl QueryResponse {
    /// Creates a successful response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// InfluxDB v2 HTTP API.
///
/// Implementations report transport failures, non-success statuses and
/// undecodable bodies as errors; an `Ok` always means InfluxDB accepted the
/// request.
#[async_trait]
pub trait InfluxApi: Send + Sync {
    /// Runs a Flux query against `org`, returning annotated CSV.
    async fn query(&self, org: &str, flux: &str) -> InfluxMcpResult<QueryResponse>;

    /// Writes line protocol.
    async fn write(&self, request: &WriteRequest) -> InfluxMcpResult<()>;

    /// Lists organizations visible to the token.
    async fn list_organizations(&self) -> InfluxMcpResult<Vec<Organization>>;

    /// Lists buckets visible to the token.
    async fn list_buckets(&self) -> InfluxMcpResult<Vec<Bucket>>;

    /// Creates a bucket.
    async fn create_bucket(&self, request: &CreateBucket) -> InfluxMcpResult<Bucket>;

    /// Creates an organization.
    async fn create_organization(
        &self,
        request: &CreateOrganization,
    ) -> InfluxMcpResult<Organization>;

    /// Reports server health.
    async fn health(&self) -> InfluxMcpResult<Health>;
}
