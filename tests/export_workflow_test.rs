//! Integration tests for the export pipeline

use std::fs;

use serde_json::json;

use cartokit::delivery::{DeliverySink, FileSink, MemorySink};
use cartokit::export::{
    export_config_payload, export_data_payloads, export_image_payload, to_data_uri,
    DataExportRequest,
};
use cartokit::serializers::DataType;
use cartokit::state::{AppState, Dataset, Field, UiState};

fn sample_state() -> AppState {
    AppState {
        datasets: vec![
            Dataset {
                id: "trips".to_string(),
                label: "trips".to_string(),
                fields: vec![
                    Field {
                        name: "city".to_string(),
                        field_type: "string".to_string(),
                    },
                    Field {
                        name: "count".to_string(),
                        field_type: "integer".to_string(),
                    },
                ],
                all_rows: vec![
                    vec![json!("berlin"), json!(10)],
                    vec![json!("tokyo"), json!(25)],
                    vec![json!("lima"), json!(7)],
                ],
                filtered_row_indices: vec![2, 0],
            },
            Dataset {
                id: "stations".to_string(),
                label: "stations".to_string(),
                fields: vec![Field {
                    name: "name".to_string(),
                    field_type: "string".to_string(),
                }],
                all_rows: vec![vec![json!("central")]],
                filtered_row_indices: Vec::new(),
            },
        ],
        ui: UiState {
            map_width: 800,
            map_height: 600,
            preview_image: Some(to_data_uri("image/png", b"not-a-real-png")),
        },
        ..AppState::default()
    }
}

#[test]
fn test_complete_export_workflow_in_memory() {
    let state = sample_state();
    let mut sink = MemorySink::new();

    // Image export from the captured preview
    let image = export_image_payload(&state).unwrap().unwrap();
    sink.deliver(&image).unwrap();

    // Config export with full data
    let config = export_config_payload(&state, true).unwrap();
    sink.deliver(&config).unwrap();

    // Filtered data export of one dataset
    let request = DataExportRequest {
        selected_dataset: Some("trips".to_string()),
        data_type: DataType::Csv,
        filtered: true,
    };
    for payload in export_data_payloads(&state, &request).unwrap() {
        sink.deliver(&payload).unwrap();
    }

    let delivered = sink.into_delivered();
    assert_eq!(delivered.len(), 3);

    assert_eq!(delivered[0].file_name, "cartokit.png");
    assert_eq!(delivered[0].bytes, b"not-a-real-png");

    assert_eq!(delivered[1].file_name, "cartokit.json");
    let document: serde_json::Value = serde_json::from_slice(&delivered[1].bytes).unwrap();
    assert_eq!(document["datasets"].as_array().unwrap().len(), 2);

    assert_eq!(delivered[2].file_name, "cartokit_trips.csv");
    let csv = String::from_utf8(delivered[2].bytes.clone()).unwrap();
    assert_eq!(csv, "city,count\nlima,7\nberlin,10\n");
}

#[test]
fn test_file_sink_delivers_and_leaves_no_partial_files() {
    let state = sample_state();
    let out_dir = std::env::temp_dir().join(format!("cartokit-test-{}", std::process::id()));

    let request = DataExportRequest {
        selected_dataset: None,
        data_type: DataType::Csv,
        filtered: false,
    };
    let payloads = export_data_payloads(&state, &request).unwrap();
    assert_eq!(payloads.len(), 2);

    let mut sink = FileSink::new(&out_dir);
    for payload in &payloads {
        sink.deliver(payload).unwrap();
    }

    let mut names: Vec<String> = fs::read_dir(&out_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["cartokit_stations.csv", "cartokit_trips.csv"]);

    let trips = fs::read_to_string(out_dir.join("cartokit_trips.csv")).unwrap();
    assert!(trips.starts_with("city,count\n"));

    fs::remove_dir_all(&out_dir).unwrap();
}

#[test]
fn test_file_sink_propagates_delivery_failure() {
    let out_dir = std::env::temp_dir().join(format!("cartokit-fail-{}", std::process::id()));
    fs::create_dir_all(&out_dir).unwrap();

    // A payload whose name points into a directory that does not exist
    let payload = cartokit::NamedPayload::new("missing/dir.csv", "text/csv", vec![1, 2, 3]);
    let mut sink = FileSink::new(&out_dir);
    assert!(sink.deliver(&payload).is_err());

    // No artifact or partial file may be left behind
    assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);

    fs::remove_dir_all(&out_dir).unwrap();
}
