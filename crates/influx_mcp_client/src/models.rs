//! InfluxDB v2 API documents.

use crate::Precision;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// An InfluxDB organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    pub id: String,
    /// Organization name
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bucket retention rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionRule {
    /// Rule type, `expire` for time-based retention
    #[serde(rename = "type", default = "RetentionRule::expire_kind")]
    pub kind: String,
    /// Data older than this many seconds is dropped; zero keeps data forever
    #[serde(default)]
    pub every_seconds: u64,
}

impl RetentionRule {
    fn expire_kind() -> String {
        "expire".to_string()
    }

    /// Time-based rule expiring data after `seconds`.
    pub fn expire(seconds: u64) -> Self {
        Self {
            kind: Self::expire_kind(),
            every_seconds: seconds,
        }
    }
}

/// An InfluxDB bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket ID
    pub id: String,
    /// Bucket name
    pub name: String,
    /// ID of the owning organization
    #[serde(rename = "orgID", default)]
    pub org_id: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Retention rules; empty means infinite retention
    #[serde(rename = "retentionRules", default)]
    pub retention_rules: Vec<RetentionRule>,
}

impl Bucket {
    /// Retention period of the first non-zero `expire` rule, if any.
    pub fn retention_period_seconds(&self) -> Option<u64> {
        self.retention_rules
            .iter()
            .find(|rule| rule.kind == "expire" && rule.every_seconds > 0)
            .map(|rule| rule.every_seconds)
    }
}

/// Request body for creating a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CreateBucket {
    /// Bucket name
    #[builder(setter(into))]
    pub name: String,
    /// ID of the owning organization
    #[serde(rename = "orgID")]
    #[builder(setter(into))]
    pub org_id: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub description: Option<String>,
    /// Retention rules; omitted for infinite retention
    #[serde(rename = "retentionRules", skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub retention_rules: Vec<RetentionRule>,
}

/// Request body for creating an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct CreateOrganization {
    /// Organization name
    #[builder(setter(into))]
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option, into))]
    pub description: Option<String>,
}

/// Line protocol write.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct WriteRequest {
    /// Organization name or ID
    #[builder(setter(into))]
    pub org: String,
    /// Bucket name or ID
    #[builder(setter(into))]
    pub bucket: String,
    /// Line protocol payload
    #[builder(setter(into))]
    pub data: String,
    /// Timestamp precision of `data`
    #[builder(default)]
    pub precision: Precision,
}

/// Result of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Service name, usually `influxdb`
    #[serde(default)]
    pub name: String,
    /// `pass` or `fail`
    pub status: String,
    /// Human-readable detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Server version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Health {
    /// Returns true when InfluxDB reports itself ready.
    pub fn is_pass(&self) -> bool {
        self.status == "pass"
    }
}
