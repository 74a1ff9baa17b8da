//! Tests for the CSV serializer

use serde_json::json;

use crate::serializers::{CsvSerializer, DataSerializer};
use crate::state::{Field, Row};

fn fields(names: &[&str]) -> Vec<Field> {
    names
        .iter()
        .map(|name| Field {
            name: name.to_string(),
            field_type: "string".to_string(),
        })
        .collect()
}

fn serialize(rows: &[Row], fields: &[Field]) -> String {
    let refs: Vec<&Row> = rows.iter().collect();
    let bytes = CsvSerializer.serialize(&refs, fields).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_header_and_rows() {
    let fields = fields(&["city", "count"]);
    let rows = vec![
        vec![json!("berlin"), json!(10)],
        vec![json!("tokyo"), json!(25)],
    ];

    let text = serialize(&rows, &fields);
    assert_eq!(text, "city,count\nberlin,10\ntokyo,25\n");
}

#[test]
fn test_empty_row_set_yields_header_only() {
    let fields = fields(&["city"]);
    let text = serialize(&[], &fields);
    assert_eq!(text, "city\n");
}

#[test]
fn test_cells_with_delimiters_are_quoted() {
    let fields = fields(&["note"]);
    let rows = vec![
        vec![json!("a,b")],
        vec![json!("say \"hi\"")],
        vec![json!("line\nbreak")],
    ];

    let text = serialize(&rows, &fields);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[1], "\"a,b\"");
    assert_eq!(lines[2], "\"say \"\"hi\"\"\"");
    assert_eq!(lines[3], "\"line");
    assert_eq!(lines[4], "break\"");
}

#[test]
fn test_quoted_header_names() {
    let fields = fields(&["name, first"]);
    let text = serialize(&[], &fields);
    assert_eq!(text, "\"name, first\"\n");
}

#[test]
fn test_null_and_missing_cells_are_empty() {
    let fields = fields(&["a", "b", "c"]);
    let rows = vec![vec![json!(null), json!(1)]];

    let text = serialize(&rows, &fields);
    assert_eq!(text, "a,b,c\n,1,\n");
}

#[test]
fn test_surplus_cells_are_dropped() {
    let fields = fields(&["a"]);
    let rows = vec![vec![json!(1), json!(2), json!(3)]];

    let text = serialize(&rows, &fields);
    assert_eq!(text, "a\n1\n");
}

#[test]
fn test_scalar_formatting() {
    let fields = fields(&["bool", "float", "nested"]);
    let rows = vec![vec![json!(true), json!(1.5), json!({"k": 1})]];

    let text = serialize(&rows, &fields);
    assert_eq!(text, "bool,float,nested\ntrue,1.5,\"{\"\"k\"\":1}\"\n");
}
