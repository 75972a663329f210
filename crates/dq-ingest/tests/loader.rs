//! Integration tests for naive CSV loading.

use std::io::Write;

use dq_model::CellValue;

use dq_ingest::{load_csv, parse_csv_str};

#[test]
fn loads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "age,income,churn\n34,52000,0\n29,,1\n").expect("write csv");
    let dataset = load_csv(file.path()).expect("load csv");
    assert_eq!(dataset.headers, vec!["age", "income", "churn"]);
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.rows[1].get("income"), Some(&CellValue::Null));
}

#[test]
fn strips_bom_from_first_header() {
    let dataset = parse_csv_str("\u{feff}id,score\n1,2\n").expect("parse");
    assert_eq!(dataset.headers[0], "id");
}

#[test]
fn trims_headers_and_cells() {
    let dataset = parse_csv_str(" name , value \n alice , 10 \n").expect("parse");
    assert_eq!(dataset.headers, vec!["name", "value"]);
    assert_eq!(
        dataset.rows[0].get("name"),
        Some(&CellValue::Text("alice".to_string()))
    );
    assert_eq!(dataset.rows[0].get("value"), Some(&CellValue::Number(10.0)));
}

#[test]
fn skips_blank_lines() {
    let dataset = parse_csv_str("a\n1\n\n2\n\n").expect("parse");
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn crlf_line_endings_parse() {
    let dataset = parse_csv_str("a,b\r\n1,x\r\n").expect("parse");
    assert_eq!(dataset.rows[0].get("a"), Some(&CellValue::Number(1.0)));
    assert_eq!(
        dataset.rows[0].get("b"),
        Some(&CellValue::Text("x".to_string()))
    );
}

#[test]
fn quoting_is_not_interpreted() {
    // The loader is deliberately naive: quotes are literal characters and
    // an embedded comma splits the field.
    let dataset = parse_csv_str("a,b\n\"x,y\",2\n").expect("parse");
    assert_eq!(
        dataset.rows[0].get("a"),
        Some(&CellValue::Text("\"x".to_string()))
    );
    assert_eq!(
        dataset.rows[0].get("b"),
        Some(&CellValue::Text("y\"".to_string()))
    );
}

#[test]
fn negative_and_scientific_numbers_coerce() {
    let dataset = parse_csv_str("a,b\n-3.5,1e3\n").expect("parse");
    assert_eq!(dataset.rows[0].get("a"), Some(&CellValue::Number(-3.5)));
    assert_eq!(dataset.rows[0].get("b"), Some(&CellValue::Number(1000.0)));
}
