//! Test doubles shared by unit tests.

use async_trait::async_trait;
use influx_mcp_client::{
    Bucket, CreateBucket, CreateOrganization, Health, InfluxApi, Organization, QueryResponse,
    WriteRequest,
};
use influx_mcp_error::{HttpError, HttpErrorKind, InfluxMcpResult};

/// API whose every call fails as if InfluxDB were unreachable.
pub(crate) struct NullApi;

fn unreachable<T>() -> InfluxMcpResult<T> {
    Err(HttpError::new(HttpErrorKind::Transport("connection refused".to_string())).into())
}

#[async_trait]
impl InfluxApi for NullApi {
    async fn query(&self, _org: &str, _flux: &str) -> InfluxMcpResult<QueryResponse> {
        unreachable()
    }

    async fn write(&self, _request: &WriteRequest) -> InfluxMcpResult<()> {
        unreachable()
    }

    async fn list_organizations(&self) -> InfluxMcpResult<Vec<Organization>> {
        unreachable()
    }

    async fn list_buckets(&self) -> InfluxMcpResult<Vec<Bucket>> {
        unreachable()
    }

    async fn create_bucket(&self, _request: &CreateBucket) -> InfluxMcpResult<Bucket> {
        unreachable()
    }

    async fn create_organization(
        &self,
        _request: &CreateOrganization,
    ) -> InfluxMcpResult<Organization> {
        unreachable()
    }

    async fn health(&self) -> InfluxMcpResult<Health> {
        unreachable()
    }
}
