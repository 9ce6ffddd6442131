//! In-memory InfluxDB double for MCP tests.

#![allow(dead_code)]

use async_trait::async_trait;
use influx_mcp_client::{
    Bucket, CreateBucket, CreateOrganization, Health, InfluxApi, Organization, QueryResponse,
    RetentionRule, WriteRequest,
};
use influx_mcp_error::{HttpError, HttpErrorKind, InfluxMcpResult};
use std::sync::{Arc, Mutex};

/// Annotated CSV as returned by `schema.measurements()`.
pub const MEASUREMENTS_CSV: &str = "#datatype,string,long,string\r\n\
#group,false,false,false\r\n\
#default,_result,,\r\n\
,result,table,_value\r\n\
,,0,cpu\r\n\
,,0,mem\r\n\
\r\n";

/// Annotated CSV of a small two-table query result.
pub const QUERY_CSV: &str = "#datatype,string,long,dateTime:RFC3339,double,string,string\r\n\
#group,false,false,false,false,true,true\r\n\
#default,_result,,,,,\r\n\
,result,table,_time,_value,_field,_measurement\r\n\
,,0,2024-01-01T00:00:00Z,21.5,temperature,weather\r\n\
,,1,2024-01-01T00:00:00Z,48,humidity,weather\r\n\
\r\n";

/// How the fake answers.
#[derive(Clone)]
pub enum Behavior {
    /// Answer queries with this CSV body and status
    Respond { status: u16, body: String },
    /// Fail every call with HTTP 401
    Unauthorized,
}

/// InfluxDB API double that records what it was asked.
pub struct FakeApi {
    behavior: Behavior,
    pub queries: Mutex<Vec<(String, String)>>,
    pub writes: Mutex<Vec<WriteRequest>>,
    pub created_buckets: Mutex<Vec<CreateBucket>>,
    pub created_orgs: Mutex<Vec<CreateOrganization>>,
}

impl FakeApi {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            queries: Mutex::new(Vec::new()),
            writes: Mutex::new(Vec::new()),
            created_buckets: Mutex::new(Vec::new()),
            created_orgs: Mutex::new(Vec::new()),
        })
    }

    pub fn with_csv(body: &str) -> Arc<Self> {
        Self::new(Behavior::Respond {
            status: 200,
            body: body.to_string(),
        })
    }

    pub fn unauthorized() -> Arc<Self> {
        Self::new(Behavior::Unauthorized)
    }

    fn check(&self) -> InfluxMcpResult<()> {
        match &self.behavior {
            Behavior::Unauthorized => Err(HttpError::new(HttpErrorKind::Status {
                status: 401,
                body: r#"{"code":"unauthorized","message":"unauthorized access"}"#.to_string(),
            })
            .into()),
            Behavior::Respond { .. } => Ok(()),
        }
    }
}

#[async_trait]
impl InfluxApi for FakeApi {
    async fn query(&self, org: &str, flux: &str) -> InfluxMcpResult<QueryResponse> {
        self.queries
            .lock()
            .unwrap()
            .push((org.to_string(), flux.to_string()));
        self.check()?;
        match &self.behavior {
            Behavior::Respond { status, body } => Ok(QueryResponse {
                status: *status,
                body: body.clone(),
            }),
            Behavior::Unauthorized => unreachable!("check() rejects"),
        }
    }

    async fn write(&self, request: &WriteRequest) -> InfluxMcpResult<()> {
        self.check()?;
        self.writes.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn list_organizations(&self) -> InfluxMcpResult<Vec<Organization>> {
        self.check()?;
        Ok(vec![Organization {
            id: "o1".to_string(),
            name: "acme".to_string(),
            description: Some("Acme Corp".to_string()),
        }])
    }

    async fn list_buckets(&self) -> InfluxMcpResult<Vec<Bucket>> {
        self.check()?;
        Ok(vec![
            Bucket {
                id: "b1".to_string(),
                name: "telemetry".to_string(),
                org_id: "o1".to_string(),
                description: None,
                retention_rules: vec![RetentionRule::expire(604800)],
            },
            Bucket {
                id: "b2".to_string(),
                name: "archive".to_string(),
                org_id: "o1".to_string(),
                description: None,
                retention_rules: Vec::new(),
            },
        ])
    }

    async fn create_bucket(&self, request: &CreateBucket) -> InfluxMcpResult<Bucket> {
        self.check()?;
        self.created_buckets.lock().unwrap().push(request.clone());
        Ok(Bucket {
            id: "new-bucket-id".to_string(),
            name: request.name.clone(),
            org_id: request.org_id.clone(),
            description: request.description.clone(),
            retention_rules: request.retention_rules.clone(),
        })
    }

    async fn create_organization(
        &self,
        request: &CreateOrganization,
    ) -> InfluxMcpResult<Organization> {
        self.check()?;
        self.created_orgs.lock().unwrap().push(request.clone());
        Ok(Organization {
            id: "new-org-id".to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
        })
    }

    async fn health(&self) -> InfluxMcpResult<Health> {
        self.check()?;
        Ok(Health {
            name: "influxdb".to_string(),
            status: "pass".to_string(),
            message: None,
            version: Some("v2.7.4".to_string()),
        })
    }
}
