//! Scenario tests for annotated CSV extraction.

use influx_mcp_tabular::{AnnotatedTable, extract_column, extract_records};

#[test]
fn test_extracts_value_column_in_row_order() {
    let csv = ",result,table,_value\n,,0,cpu_usage\n,,0,temperature\n,,0,memory_usage\n";
    assert_eq!(
        extract_column(csv, "_value"),
        vec!["cpu_usage", "temperature", "memory_usage"]
    );
}

#[test]
fn test_skips_leading_annotation_rows() {
    let csv = "#datatype,string,long,string\n\
               #group,false,false,false\n\
               #default,_result,,\n\
               ,result,table,_value\n\
               ,,0,sensor_data\n";
    assert_eq!(extract_column(csv, "_value"), vec!["sensor_data"]);
}

#[test]
fn test_missing_column_yields_nothing() {
    let csv = ",result,table,measurement\n,,0,cpu\n,,0,disk\n";
    assert!(extract_column(csv, "_value").is_empty());
}

#[test]
fn test_values_are_trimmed() {
    let csv = ",result,table,_value\n,,0, cpu_usage \n,,0,  temperature  \n";
    assert_eq!(extract_column(csv, "_value"), vec!["cpu_usage", "temperature"]);
}

#[test]
fn test_empty_input() {
    assert!(extract_column("", "_value").is_empty());
    assert!(extract_records("").is_empty());
}

#[test]
fn test_annotation_only_input() {
    let csv = "#datatype,string,long\n#group,false,false\n#default,_result,\n";
    assert!(extract_column(csv, "_value").is_empty());
    assert!(extract_records(csv).is_empty());
}

#[test]
fn test_header_only_input() {
    let csv = ",result,table,_value\r\n";
    assert!(extract_column(csv, "_value").is_empty());
    assert!(extract_records(csv).is_empty());
}

#[test]
fn test_interleaved_annotations_are_ignored() {
    let csv = "#group,false,false\n\
               ,result,_value\n\
               #datatype,string,string\n\
               ,,first\n\
               #comment between rows\n\
               ,,second\n\
               #trailing\n";
    assert_eq!(extract_column(csv, "_value"), vec!["first", "second"]);

    let records = extract_records(csv);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["_value"], "second");
}

#[test]
fn test_padded_header_names_match() {
    let csv = " , result ,  _value \n,,cpu\n";
    assert_eq!(extract_column(csv, "_value"), vec!["cpu"]);
    assert_eq!(extract_records(csv)[0]["result"], "");
}

#[test]
fn test_short_rows_do_not_fault() {
    let csv = ",result,table,_value\n,,0\n,\n,,0,disk\n";
    assert_eq!(extract_column(csv, "_value"), vec!["disk"]);

    let records = extract_records(csv);
    assert_eq!(records.len(), 3);
    assert!(!records[0].contains_key("_value"));
    assert_eq!(records[1].len(), 2);
    assert_eq!(records[2]["_value"], "disk");
}

#[test]
fn test_blank_values_are_dropped_not_reordered() {
    let csv = "_value\nb\n \na\n\nb\n";
    assert_eq!(extract_column(csv, "_value"), vec!["b", "a", "b"]);
}

#[test]
fn test_crlf_payload() {
    let csv = "#group,false,false\r\n,result,_value\r\n,,cpu\r\n,,mem\r\n\r\n";
    assert_eq!(extract_column(csv, "_value"), vec!["cpu", "mem"]);
}

#[test]
fn test_influx_query_result_records() {
    let csv = "#datatype,string,long,dateTime:RFC3339,double,string,string\n\
               #group,false,false,false,false,true,true\n\
               #default,_result,,,,,\n\
               ,result,table,_time,_value,_field,_measurement\n\
               ,,0,2024-01-01T00:00:00Z,21.5,temp,weather\n\
               ,,0,2024-01-01T00:01:00Z,21.7,temp,weather\n\
               \n\
               ,,1,2024-01-01T00:00:00Z,40,humidity,weather\n";

    let records = extract_records(csv);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["_value"], "21.5");
    assert_eq!(records[1]["_time"], "2024-01-01T00:01:00Z");
    assert_eq!(records[2]["table"], "1");
    assert_eq!(records[2]["_field"], "humidity");

    assert_eq!(extract_column(csv, "_field"), vec!["temp", "temp", "humidity"]);
}

#[test]
fn test_extractors_share_header_detection() {
    let csv = "#a\n\n#b\nx, y \n1,2\n#c\n3, 4\n";
    let table = AnnotatedTable::parse(csv);
    assert_eq!(table.header(), ["x", "y"]);

    let from_records: Vec<String> = extract_records(csv)
        .into_iter()
        .filter_map(|record| record.get("y").cloned())
        .collect();
    assert_eq!(from_records, extract_column(csv, "y"));
}
