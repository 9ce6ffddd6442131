//! InfluxDB v2 HTTP gateway.
//!
//! [`InfluxApi`] is the seam between the MCP layer and InfluxDB: queries,
//! writes and provisioning calls go through it. [`InfluxClient`] implements
//! it over `reqwest`, configured by [`InfluxConfig`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod client;
mod config;
mod flux;
mod models;

pub use api::{InfluxApi, QueryResponse};
pub use client::InfluxClient;
pub use config::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_URL, ENV_ORG, ENV_TIMEOUT_SECS, ENV_TOKEN, ENV_URL, InfluxConfig,
};
pub use flux::{Precision, escape_flux_string, measurements_query};
pub use models::{
    Bucket, CreateBucket, CreateOrganization, Health, Organization, RetentionRule, WriteRequest,
};
