//! Normalization of InfluxDB annotated CSV.
//!
//! The query endpoint answers with comma separated text interleaved with
//! `#`-prefixed annotation rows (`#datatype`, `#group`, `#default`). This
//! crate strips the annotations, finds the header row and hands back either
//! the values of a single column or one record per data row.
//!
//! # Usage
//!
//! ```
//! use influx_mcp_tabular::{extract_column, extract_records};
//!
//! let csv = "#group,false,false,false\n,result,table,_value\n,,0,cpu\n,,0,mem\n";
//!
//! assert_eq!(extract_column(csv, "_value"), vec!["cpu", "mem"]);
//! assert_eq!(extract_records(csv)[1]["_value"], "mem");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dialect;
mod extract;
mod table;

pub use dialect::{DEFAULT_ANNOTATION_MARKER, DEFAULT_DELIMITER, TableDialect};
pub use extract::{extract_column, extract_column_with, extract_records, extract_records_with};
pub use table::{AnnotatedTable, Record};
