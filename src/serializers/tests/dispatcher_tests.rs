//! Tests for per-dataset format dispatch

use serde_json::json;

use crate::serializers::{export_dataset, DataType};
use crate::state::{Dataset, Field};

fn sample_dataset() -> Dataset {
    Dataset {
        id: "ds-1".to_string(),
        label: "trips".to_string(),
        fields: vec![Field {
            name: "city".to_string(),
            field_type: "string".to_string(),
        }],
        all_rows: vec![vec![json!("r0")], vec![json!("r1")], vec![json!("r2")]],
        filtered_row_indices: vec![2, 0],
    }
}

#[test]
fn test_unfiltered_export_serializes_all_rows() {
    let payload = export_dataset(&sample_dataset(), DataType::Csv, false)
        .unwrap()
        .unwrap();

    let text = String::from_utf8(payload.bytes).unwrap();
    assert_eq!(text, "city\nr0\nr1\nr2\n");
}

#[test]
fn test_filtered_export_preserves_index_order() {
    let payload = export_dataset(&sample_dataset(), DataType::Csv, true)
        .unwrap()
        .unwrap();

    // Indices [2, 0] map to rows r2 then r0, not row order
    let text = String::from_utf8(payload.bytes).unwrap();
    assert_eq!(text, "city\nr2\nr0\n");
}

#[test]
fn test_filtered_export_skips_out_of_range_indices() {
    let mut dataset = sample_dataset();
    dataset.filtered_row_indices = vec![5, 1];

    let payload = export_dataset(&dataset, DataType::Csv, true)
        .unwrap()
        .unwrap();

    let text = String::from_utf8(payload.bytes).unwrap();
    assert_eq!(text, "city\nr1\n");
}

#[test]
fn test_payload_naming() {
    let payload = export_dataset(&sample_dataset(), DataType::Csv, false)
        .unwrap()
        .unwrap();

    assert_eq!(payload.file_name, "cartokit_trips.csv");
    assert_eq!(payload.mime_type, "text/csv");
}

#[test]
fn test_label_sanitizing_in_file_name() {
    let mut dataset = sample_dataset();
    dataset.label = "trips/2026: summer".to_string();

    let payload = export_dataset(&dataset, DataType::Csv, false)
        .unwrap()
        .unwrap();

    assert_eq!(payload.file_name, "cartokit_trips-2026- summer.csv");
}

#[test]
fn test_unwired_data_types_produce_no_payload() {
    assert!(export_dataset(&sample_dataset(), DataType::Json, false)
        .unwrap()
        .is_none());
    assert!(export_dataset(&sample_dataset(), DataType::GeoJson, true)
        .unwrap()
        .is_none());
}

#[test]
fn test_data_type_names_round_trip() {
    for data_type in [DataType::Csv, DataType::Json, DataType::GeoJson] {
        assert_eq!(DataType::from_name(data_type.name()), Some(data_type));
    }
    assert_eq!(DataType::from_name("CSV"), Some(DataType::Csv));
    assert!(DataType::from_name("parquet").is_none());
}
