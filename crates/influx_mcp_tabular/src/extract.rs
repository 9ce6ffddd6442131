//! One-shot extraction helpers over [`AnnotatedTable`].

use crate::{AnnotatedTable, Record, TableDialect};
use tracing::{debug, instrument};

/// Extracts the trimmed, non-empty values of `column` from annotated CSV.
///
/// Annotation rows are ignored wherever they appear and the header is the
/// first remaining line. An empty payload, a payload with only annotations
/// or a header without `column` all yield an empty list.
///
/// # Examples
///
/// ```
/// use influx_mcp_tabular::extract_column;
///
/// let csv = ",result,table,_value\n,,0, cpu_usage \n,,0,\n,,0,temperature\n";
/// assert_eq!(extract_column(csv, "_value"), vec!["cpu_usage", "temperature"]);
/// assert!(extract_column(csv, "measurement").is_empty());
/// ```
pub fn extract_column(text: &str, column: &str) -> Vec<String> {
    extract_column_with(text, column, &TableDialect::default())
}

/// [`extract_column`] with a custom dialect.
#[instrument(skip(text, dialect), fields(bytes = text.len()))]
pub fn extract_column_with(text: &str, column: &str, dialect: &TableDialect) -> Vec<String> {
    let values = AnnotatedTable::parse_with(text, dialect).column_values(column);
    debug!(count = values.len(), "Extracted column values");
    values
}

/// Extracts one record per data row from annotated CSV.
///
/// Uses the same header detection as [`extract_column`], so for any payload
/// both agree on the column names.
///
/// # Examples
///
/// ```
/// use influx_mcp_tabular::extract_records;
///
/// let csv = "#datatype,string,long\n,result,table\n,_result,0\n";
/// let records = extract_records(csv);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0]["result"], "_result");
/// assert_eq!(records[0][""], "");
/// ```
pub fn extract_records(text: &str) -> Vec<Record> {
    extract_records_with(text, &TableDialect::default())
}

/// [`extract_records`] with a custom dialect.
#[instrument(skip(text, dialect), fields(bytes = text.len()))]
pub fn extract_records_with(text: &str, dialect: &TableDialect) -> Vec<Record> {
    let records = AnnotatedTable::parse_with(text, dialect).records();
    debug!(count = records.len(), "Extracted records");
    records
}
