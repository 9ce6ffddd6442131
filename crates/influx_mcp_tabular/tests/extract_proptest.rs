//! Property-based tests for annotated CSV extraction.
//!
//! Generated payloads mix annotation rows, blank lines and CRLF terminators
//! around a header and data rows whose fields carry random padding.

use influx_mcp_tabular::{AnnotatedTable, extract_column, extract_records};
use proptest::prelude::*;

/// Column names that never repeat within one header.
fn header_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("_?[a-z]{1,6}", 1..6)
        .prop_map(|names| names.into_iter().collect())
}

/// Field values with optional surrounding spaces, possibly blank.
fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_.]{1,8}",
        " {1,3}[a-z0-9_.]{1,8} {0,3}",
        " {0,3}",
    ]
}

fn annotation_strategy() -> impl Strategy<Value = String> {
    "#[a-z,]{0,12}"
}

/// A data row as fields, between zero and header-width-plus-one long.
fn rows_strategy(width: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(field_strategy(), 0..=width + 1), 0..8)
}

/// Renders content lines with annotations and blank lines interleaved.
fn render(
    header: &[String],
    rows: &[Vec<String>],
    noise: &[(usize, String)],
    crlf: bool,
) -> String {
    let mut lines = vec![format!(" {} ", header.join(" , "))];
    lines.extend(rows.iter().map(|row| {
        let line = row.join(",");
        // A data row that renders empty would vanish; keep it a row.
        if line.is_empty() { ",".to_string() } else { line }
    }));
    for (position, extra) in noise {
        let at = position % (lines.len() + 1);
        lines.insert(at, extra.clone());
    }
    let terminator = if crlf { "\r\n" } else { "\n" };
    lines.join(terminator)
}

fn noise_strategy() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::vec(
        (any::<usize>(), prop_oneof![annotation_strategy(), Just(String::new())]),
        0..6,
    )
}

proptest! {
    #[test]
    fn annotation_only_payload_is_empty(
        annotations in prop::collection::vec(annotation_strategy(), 0..8),
        crlf in any::<bool>(),
    ) {
        let text = annotations.join(if crlf { "\r\n" } else { "\n" });
        prop_assert!(extract_column(&text, "_value").is_empty());
        prop_assert!(extract_records(&text).is_empty());
    }

    #[test]
    fn header_is_first_non_annotation_line(
        header in header_strategy(),
        rows in header_strategy().prop_flat_map(|h| rows_strategy(h.len())),
        noise in noise_strategy(),
        crlf in any::<bool>(),
    ) {
        let text = render(&header, &rows, &noise, crlf);
        let table = AnnotatedTable::parse(&text);
        prop_assert_eq!(table.header(), header.as_slice());
        prop_assert_eq!(table.rows().len(), rows.len());
    }

    #[test]
    fn extracted_values_are_trimmed_non_empty_and_ordered(
        (header, rows) in header_strategy().prop_flat_map(|h| {
            let width = h.len();
            (Just(h), rows_strategy(width))
        }),
        pick in any::<usize>(),
        noise in noise_strategy(),
    ) {
        let column = &header[pick % header.len()];
        let index = header.iter().position(|name| name == column).unwrap_or(0);
        let text = render(&header, &rows, &noise, false);

        let expected: Vec<String> = rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(|field| field.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect();

        let values = extract_column(&text, column);
        prop_assert!(values.len() <= rows.len());
        for value in &values {
            prop_assert!(!value.is_empty());
            prop_assert_eq!(value.trim(), value.as_str());
        }
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn absent_column_is_empty(
        (header, rows) in header_strategy().prop_flat_map(|h| {
            let width = h.len();
            (Just(h), rows_strategy(width))
        }),
    ) {
        let text = render(&header, &rows, &[], false);
        prop_assert!(extract_column(&text, "NOT_A_COLUMN").is_empty());
    }

    #[test]
    fn column_and_record_extraction_agree(
        (header, rows) in header_strategy().prop_flat_map(|h| {
            let width = h.len();
            (Just(h), rows_strategy(width))
        }),
        noise in noise_strategy(),
        crlf in any::<bool>(),
    ) {
        let text = render(&header, &rows, &noise, crlf);
        let records = extract_records(&text);
        prop_assert_eq!(records.len(), rows.len());

        for column in &header {
            let from_records: Vec<String> = records
                .iter()
                .filter_map(|record| record.get(column))
                .filter(|value| !value.is_empty())
                .cloned()
                .collect();
            prop_assert_eq!(from_records, extract_column(&text, column));
        }
    }
}
