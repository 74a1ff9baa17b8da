//! Application-state model read by the export operations
//!
//! These types mirror the slices of the map application's state container
//! that exports consume: the dataset collection, the visual map
//! configuration, descriptive map info and the UI slice holding the
//! captured preview image. Everything here is read-only from the export
//! pipeline's perspective.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a dataset, as loosely-typed cells
pub type Row = Vec<Value>;

/// Descriptor for one dataset column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Column name, used as the CSV header
    pub name: String,
    /// Declared value type of the column
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A loaded dataset with its active filter result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Stable identifier within the dataset collection
    pub id: String,
    /// Human-readable label, used in export file names
    pub label: String,
    /// Ordered column descriptors
    pub fields: Vec<Field>,
    /// All rows, in load order
    pub all_rows: Vec<Row>,
    /// Indices into `all_rows` currently visible under active filters
    #[serde(default)]
    pub filtered_row_indices: Vec<usize>,
}

impl Dataset {
    /// Resolve the row set an export should serialize
    ///
    /// With `filtered` set, each filter index is mapped to its row in
    /// `all_rows`, preserving the filter's index order. Indices that fall
    /// outside the row range are skipped with a warning.
    pub fn rows_for_export(&self, filtered: bool) -> Vec<&Row> {
        if !filtered {
            return self.all_rows.iter().collect();
        }

        self.filtered_row_indices
            .iter()
            .filter_map(|&index| {
                let row = self.all_rows.get(index);
                if row.is_none() {
                    warn!(
                        "dataset '{}': filter index {} is out of range ({} rows)",
                        self.id,
                        index,
                        self.all_rows.len()
                    );
                }
                row
            })
            .collect()
    }
}

/// Visual base-map style selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    /// Identifier of the active style
    pub style_type: String,
    /// URL of a user-provided style, when the active style is custom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_style_url: Option<String>,
}

/// Configuration of one rendered layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Layer identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Renderer type (point, arc, polygon, ...)
    pub layer_type: String,
    /// Dataset this layer draws from
    pub data_id: String,
    /// Whether the layer is currently shown
    #[serde(default)]
    pub is_visible: bool,
}

/// Configuration of one active filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Filter identifier
    pub id: String,
    /// Dataset the filter applies to
    pub data_id: String,
    /// Field the filter constrains
    pub field_name: String,
    /// Current filter value
    #[serde(default)]
    pub value: Value,
}

/// Visual map configuration: style, layers and filters, no row data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Config schema version
    pub version: String,
    /// Base-map style
    pub map_style: MapStyle,
    /// Rendered layers
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
    /// Active filters
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

/// Descriptive map metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapInfo {
    /// Map title
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
}

/// UI slice relevant to exports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    /// Width of the on-screen map surface in pixels
    #[serde(default)]
    pub map_width: i32,
    /// Height of the on-screen map surface in pixels
    #[serde(default)]
    pub map_height: i32,
    /// Captured preview image as a data URI, when a capture has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
}

/// Snapshot of the application state an export call reads
///
/// The caller must not mutate state while an export runs; each export is a
/// synchronous one-shot computation over this snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Dataset collection, in load order
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    /// Visual map configuration
    #[serde(default)]
    pub config: MapConfig,
    /// Descriptive metadata
    #[serde(default)]
    pub info: MapInfo,
    /// UI slice
    #[serde(default)]
    pub ui: UiState,
}
