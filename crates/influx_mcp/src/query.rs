//! Flux execution with annotated CSV normalization.

use crate::{McpError, McpResult};
use influx_mcp_client::{InfluxApi, QueryResponse, measurements_query};
use influx_mcp_tabular::{AnnotatedTable, Record};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Column holding measurement names in `schema.measurements()` results.
const MEASUREMENT_COLUMN: &str = "_value";

/// Measurements stored in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementList {
    /// Bucket that was inspected
    pub bucket: String,
    /// Measurement names in the order InfluxDB returned them
    pub measurements: Vec<String>,
}

/// Normalized result of a Flux query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Organization the query ran against
    pub org: String,
    /// Flux text as submitted
    pub query: String,
    /// Number of data rows
    pub row_count: usize,
    /// Column names of the result header
    pub columns: Vec<String>,
    /// One record per data row, keyed by column name
    pub rows: Vec<Record>,
}

/// Runs `flux` and returns the body, rejecting non-success statuses.
async fn fetch(api: &dyn InfluxApi, org: &str, flux: &str) -> McpResult<QueryResponse> {
    let response = api.query(org, flux).await.map_err(|e| {
        warn!(org, error = %e, "Query failed");
        McpError::from(e)
    })?;

    if !(200..300).contains(&response.status) {
        warn!(org, status = response.status, "Query returned non-success status");
        return Err(McpError::Upstream(format!(
            "HTTP {}: {}",
            response.status, response.body
        )));
    }

    Ok(response)
}

/// Lists the measurements in `bucket`.
///
/// A bucket without measurements, or a response without a `_value` column,
/// yields an empty list rather than an error.
#[instrument(skip(api))]
pub async fn fetch_measurements(
    api: &dyn InfluxApi,
    org: &str,
    bucket: &str,
) -> McpResult<MeasurementList> {
    let response = fetch(api, org, &measurements_query(bucket)).await?;
    let measurements = AnnotatedTable::parse(&response.body).column_values(MEASUREMENT_COLUMN);

    debug!(count = measurements.len(), "Listed measurements");
    Ok(MeasurementList {
        bucket: bucket.to_string(),
        measurements,
    })
}

/// Runs a Flux query and converts its annotated CSV into records.
#[instrument(skip(api, flux), fields(flux_len = flux.len()))]
pub async fn run_query(api: &dyn InfluxApi, org: &str, flux: &str) -> McpResult<QueryResult> {
    let response = fetch(api, org, flux).await?;
    let table = AnnotatedTable::parse(&response.body);
    let rows = table.records();

    debug!(columns = table.header().len(), rows = rows.len(), "Normalized query result");
    Ok(QueryResult {
        org: org.to_string(),
        query: flux.to_string(),
        row_count: rows.len(),
        columns: table.header().to_vec(),
        rows,
    })
}

/// Serializes a result for delivery as MCP text content.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> McpResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::Extraction(e.to_string()))
}
