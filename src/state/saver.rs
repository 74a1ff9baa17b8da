//! Saved-document construction
//!
//! Builds the serializable documents behind the config and standalone
//! document exports: the full saved map (config plus row data) and the
//! config-only variant (visual style and filters, no rows).

use serde::{Deserialize, Serialize};

use super::types::{AppState, Dataset, Field, MapConfig, MapInfo, Row};

/// Schema version written into every saved document
pub const DOCUMENT_VERSION: &str = "v1";

/// Dataset as persisted inside a full saved map
///
/// Filter state is intentionally not persisted; a reloaded map starts
/// with no active row filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedDataset {
    pub id: String,
    pub label: String,
    pub fields: Vec<Field>,
    pub all_rows: Vec<Row>,
}

impl From<&Dataset> for SavedDataset {
    fn from(dataset: &Dataset) -> Self {
        SavedDataset {
            id: dataset.id.clone(),
            label: dataset.label.clone(),
            fields: dataset.fields.clone(),
            all_rows: dataset.all_rows.clone(),
        }
    }
}

/// Full application state as a serializable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMapDocument {
    pub version: String,
    pub info: MapInfo,
    pub config: MapConfig,
    pub datasets: Vec<SavedDataset>,
}

/// Map configuration only, without row data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfigDocument {
    pub version: String,
    pub config: MapConfig,
}

/// Serialize the full application state into a saved map document
pub fn save(state: &AppState) -> SavedMapDocument {
    SavedMapDocument {
        version: DOCUMENT_VERSION.to_string(),
        info: state.info.clone(),
        config: state.config.clone(),
        datasets: state.datasets.iter().map(SavedDataset::from).collect(),
    }
}

/// Serialize only the visual map configuration
pub fn config_only(state: &AppState) -> SavedConfigDocument {
    SavedConfigDocument {
        version: DOCUMENT_VERSION.to_string(),
        config: state.config.clone(),
    }
}
