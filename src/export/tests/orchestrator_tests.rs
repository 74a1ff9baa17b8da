//! Tests for the export orchestrators

use serde_json::{json, Value};

use crate::document::{DocumentMode, StandaloneDocumentOptions};
use crate::export::datauri::to_data_uri;
use crate::export::{
    export_config_payload, export_data_payloads, export_image_payload, export_map_bundle,
    export_standalone_document_payload, DataExportRequest, ExportError,
};
use crate::serializers::DataType;
use crate::state::{AppState, Dataset, Field, MapConfig, MapInfo, MapStyle, UiState};

fn field(name: &str) -> Field {
    Field {
        name: name.to_string(),
        field_type: "string".to_string(),
    }
}

fn sample_dataset(id: &str, label: &str) -> Dataset {
    Dataset {
        id: id.to_string(),
        label: label.to_string(),
        fields: vec![field("city"), field("count")],
        all_rows: vec![
            vec![json!("berlin"), json!(10)],
            vec![json!("tokyo"), json!(25)],
            vec![json!("lima"), json!(7)],
        ],
        filtered_row_indices: vec![2, 0],
    }
}

fn sample_state() -> AppState {
    AppState {
        datasets: vec![sample_dataset("ds-1", "trips"), sample_dataset("ds-2", "stations")],
        config: MapConfig {
            version: "v1".to_string(),
            map_style: MapStyle {
                style_type: "dark".to_string(),
                custom_style_url: None,
            },
            layers: Vec::new(),
            filters: Vec::new(),
        },
        info: MapInfo {
            title: "Commute Patterns".to_string(),
            description: String::new(),
        },
        ui: UiState {
            map_width: 800,
            map_height: 600,
            preview_image: Some(to_data_uri("image/png", &[137, 80, 78, 71])),
        },
    }
}

#[test]
fn test_image_export_skips_without_preview() {
    let mut state = sample_state();
    state.ui.preview_image = None;

    let payload = export_image_payload(&state).unwrap();
    assert!(payload.is_none());
}

#[test]
fn test_image_export_decodes_preview() {
    let state = sample_state();

    let payload = export_image_payload(&state).unwrap().unwrap();
    assert_eq!(payload.file_name, "cartokit.png");
    assert_eq!(payload.mime_type, "image/png");
    assert_eq!(payload.bytes, vec![137, 80, 78, 71]);
}

#[test]
fn test_image_export_rejects_malformed_preview() {
    let mut state = sample_state();
    state.ui.preview_image = Some("data:image/png;AQID".to_string());

    let err = export_image_payload(&state).unwrap_err();
    assert!(matches!(err, ExportError::MalformedDataUri(_)), "{}", err);
}

#[test]
fn test_config_export_with_full_data_includes_datasets() {
    let state = sample_state();

    let payload = export_config_payload(&state, true).unwrap();
    assert_eq!(payload.file_name, "cartokit.json");
    assert_eq!(payload.mime_type, "application/json");

    let document: Value = serde_json::from_slice(&payload.bytes).unwrap();
    assert_eq!(document["datasets"].as_array().unwrap().len(), 2);
    assert_eq!(document["config"]["map_style"]["style_type"], "dark");
}

#[test]
fn test_config_only_export_carries_no_row_data() {
    let state = sample_state();

    let payload = export_config_payload(&state, false).unwrap();
    let document: Value = serde_json::from_slice(&payload.bytes).unwrap();

    assert!(document.get("datasets").is_none());
    assert_eq!(document["config"]["version"], "v1");
}

#[test]
fn test_standalone_document_embeds_user_token() {
    let state = sample_state();
    let options = StandaloneDocumentOptions {
        user_token: Some("pk.user-token".to_string()),
        fallback_token: "pk.fallback".to_string(),
        mode: DocumentMode::Edit,
    };

    let payload = export_standalone_document_payload(&state, &options).unwrap();
    assert_eq!(payload.file_name, "cartokit.html");
    assert_eq!(payload.mime_type, "text/html");

    let html = String::from_utf8(payload.bytes).unwrap();
    assert!(html.contains("pk.user-token"));
    assert!(!html.contains("pk.fallback"));
    assert!(html.contains("window.__MAP_MODE__ = \"EDIT\";"));
    assert!(html.contains("Commute Patterns"));
}

#[test]
fn test_standalone_document_falls_back_on_empty_token() {
    let state = sample_state();
    let options = StandaloneDocumentOptions {
        user_token: Some(String::new()),
        fallback_token: "pk.fallback".to_string(),
        mode: DocumentMode::Read,
    };

    let payload = export_standalone_document_payload(&state, &options).unwrap();
    let html = String::from_utf8(payload.bytes).unwrap();
    assert!(html.contains("pk.fallback"));
    assert!(html.contains("window.__MAP_MODE__ = \"READ\";"));
}

#[test]
fn test_standalone_document_escapes_close_tags() {
    let mut state = sample_state();
    state.datasets[0].label = "evil</script><script>alert(1)".to_string();
    let options = StandaloneDocumentOptions {
        user_token: None,
        fallback_token: "pk.fallback".to_string(),
        mode: DocumentMode::Read,
    };

    let payload = export_standalone_document_payload(&state, &options).unwrap();
    let html = String::from_utf8(payload.bytes).unwrap();
    assert!(!html.contains("evil</script>"));
    assert!(html.contains("evil<\\/script>"));
}

#[test]
fn test_data_export_of_empty_collection_yields_nothing() {
    let state = AppState::default();
    let request = DataExportRequest {
        selected_dataset: None,
        data_type: DataType::Csv,
        filtered: false,
    };

    let payloads = export_data_payloads(&state, &request).unwrap();
    assert!(payloads.is_empty());
}

#[test]
fn test_data_export_covers_all_datasets() {
    let state = sample_state();
    let request = DataExportRequest {
        selected_dataset: None,
        data_type: DataType::Csv,
        filtered: false,
    };

    let payloads = export_data_payloads(&state, &request).unwrap();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0].file_name, "cartokit_trips.csv");
    assert_eq!(payloads[1].file_name, "cartokit_stations.csv");
}

#[test]
fn test_data_export_suffixes_colliding_labels() {
    let mut state = sample_state();
    state.datasets[1].label = "trips".to_string();
    let request = DataExportRequest {
        selected_dataset: None,
        data_type: DataType::Csv,
        filtered: false,
    };

    let payloads = export_data_payloads(&state, &request).unwrap();
    assert_eq!(payloads[0].file_name, "cartokit_trips.csv");
    assert_eq!(payloads[1].file_name, "cartokit_trips-1.csv");
}

#[test]
fn test_data_export_with_unwired_type_yields_nothing() {
    let state = sample_state();
    let request = DataExportRequest {
        selected_dataset: None,
        data_type: DataType::GeoJson,
        filtered: false,
    };

    let payloads = export_data_payloads(&state, &request).unwrap();
    assert!(payloads.is_empty());
}

#[test]
fn test_bundle_carries_thumbnail_and_saved_map() {
    let state = sample_state();

    let bundle = export_map_bundle(&state).unwrap();
    assert_eq!(bundle.map.datasets.len(), 2);
    assert_eq!(bundle.info.title, "Commute Patterns");

    let thumbnail = bundle.thumbnail.unwrap();
    assert_eq!(thumbnail.mime_type, "image/png");
    assert_eq!(thumbnail.bytes, vec![137, 80, 78, 71]);
}

#[test]
fn test_bundle_without_preview_has_no_thumbnail() {
    let mut state = sample_state();
    state.ui.preview_image = None;

    let bundle = export_map_bundle(&state).unwrap();
    assert!(bundle.thumbnail.is_none());
}
