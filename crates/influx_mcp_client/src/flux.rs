//! Flux and line protocol helpers.

use serde::{Deserialize, Serialize};

/// Timestamp precision of written line protocol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Nanoseconds
    #[default]
    Ns,
    /// Microseconds
    Us,
    /// Milliseconds
    Ms,
    /// Seconds
    S,
}

/// Escapes `value` for use inside a double-quoted Flux string literal.
///
/// Besides `\\` and `"`, a `${` sequence is escaped as `\${` so that it is
/// taken literally rather than as an interpolation.
pub fn escape_flux_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' if chars.peek() == Some(&'{') => escaped.push_str("\\$"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Flux query listing the measurements stored in `bucket`.
///
/// The result is a single table whose `_value` column holds one
/// measurement name per row.
///
/// # Examples
///
/// ```
/// use influx_mcp_client::measurements_query;
///
/// let flux = measurements_query("telemetry");
/// assert!(flux.contains("schema.measurements(bucket: \"telemetry\")"));
/// ```
pub fn measurements_query(bucket: &str) -> String {
    format!(
        "import \"influxdata/influxdb/schema\"\n\nschema.measurements(bucket: \"{}\")",
        escape_flux_string(bucket)
    )
}
