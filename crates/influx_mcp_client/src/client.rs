//! `reqwest` implementation of [`InfluxApi`].

use crate::{
    Bucket, CreateBucket, CreateOrganization, Health, InfluxApi, InfluxConfig, Organization,
    QueryResponse, WriteRequest,
};
use async_trait::async_trait;
use influx_mcp_error::{ConfigError, HttpError, HttpErrorKind, InfluxMcpResult};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

#[derive(Deserialize)]
struct OrganizationList {
    #[serde(default)]
    orgs: Vec<Organization>,
}

#[derive(Deserialize)]
struct BucketList {
    #[serde(default)]
    buckets: Vec<Bucket>,
}

/// Client for the InfluxDB v2 HTTP API.
#[derive(Debug, Clone)]
pub struct InfluxClient {
    client: Client,
    config: InfluxConfig,
}

impl InfluxClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or the HTTP client cannot be
    /// built.
    #[instrument(skip(config), fields(url = %config.url()))]
    pub fn new(config: InfluxConfig) -> InfluxMcpResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        debug!(timeout_secs = config.timeout_secs(), "Created InfluxDB client");
        Ok(Self { client, config })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &InfluxConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Sends an authorized request and rejects non-success statuses.
    async fn send(&self, request: RequestBuilder, operation: &'static str) -> InfluxMcpResult<Response> {
        let response = request
            .header(AUTHORIZATION, format!("Token {}", self.config.token()))
            .send()
            .await
            .map_err(|e| {
                error!(operation, error = ?e, "HTTP request failed");
                let message = if e.is_timeout() {
                    format!("{} timed out: {}", operation, e)
                } else {
                    format!("{} failed: {}", operation, e)
                };
                HttpError::new(HttpErrorKind::Transport(message))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(operation, status = %status, body = %body, "InfluxDB returned an error");
            return Err(HttpError::new(HttpErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        debug!(operation, status = %status, "Request succeeded");
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(response: Response, operation: &'static str) -> InfluxMcpResult<T> {
        response.json::<T>().await.map_err(|e| {
            error!(operation, error = ?e, "Failed to parse response");
            HttpError::new(HttpErrorKind::Decode(format!("{}: {}", operation, e))).into()
        })
    }
}

#[async_trait]
impl InfluxApi for InfluxClient {
    #[instrument(skip(self, flux), fields(flux_len = flux.len()))]
    async fn query(&self, org: &str, flux: &str) -> InfluxMcpResult<QueryResponse> {
        let request = self
            .client
            .post(self.endpoint("/api/v2/query"))
            .query(&[("org", org)])
            .header(CONTENT_TYPE, "application/vnd.flux")
            .header(ACCEPT, "application/csv")
            .body(flux.to_string());

        let response = self.send(request, "query").await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read query body");
            HttpError::new(HttpErrorKind::Decode(format!("query: {}", e)))
        })?;

        debug!(status, bytes = body.len(), "Query returned");
        Ok(QueryResponse { status, body })
    }

    #[instrument(skip(self, request), fields(org = %request.org, bucket = %request.bucket, precision = %request.precision))]
    async fn write(&self, request: &WriteRequest) -> InfluxMcpResult<()> {
        let http = self
            .client
            .post(self.endpoint("/api/v2/write"))
            .query(&[
                ("org", request.org.as_str()),
                ("bucket", request.bucket.as_str()),
                ("precision", request.precision.as_ref()),
            ])
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(request.data.clone());

        self.send(http, "write").await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_organizations(&self) -> InfluxMcpResult<Vec<Organization>> {
        let response = self
            .send(self.client.get(self.endpoint("/api/v2/orgs")), "list organizations")
            .await?;
        let list: OrganizationList = Self::json(response, "list organizations").await?;
        Ok(list.orgs)
    }

    #[instrument(skip(self))]
    async fn list_buckets(&self) -> InfluxMcpResult<Vec<Bucket>> {
        let response = self
            .send(self.client.get(self.endpoint("/api/v2/buckets")), "list buckets")
            .await?;
        let list: BucketList = Self::json(response, "list buckets").await?;
        Ok(list.buckets)
    }

    #[instrument(skip(self, request), fields(name = %request.name, org_id = %request.org_id))]
    async fn create_bucket(&self, request: &CreateBucket) -> InfluxMcpResult<Bucket> {
        let http = self.client.post(self.endpoint("/api/v2/buckets")).json(request);
        let response = self.send(http, "create bucket").await?;
        Self::json(response, "create bucket").await
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_organization(
        &self,
        request: &CreateOrganization,
    ) -> InfluxMcpResult<Organization> {
        let http = self.client.post(self.endpoint("/api/v2/orgs")).json(request);
        let response = self.send(http, "create organization").await?;
        Self::json(response, "create organization").await
    }

    #[instrument(skip(self))]
    async fn health(&self) -> InfluxMcpResult<Health> {
        let response = self
            .send(self.client.get(self.endpoint("/health")), "health")
            .await?;
        Self::json(response, "health").await
    }
}
