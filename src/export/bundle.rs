//! In-memory map bundle export

use log::info;

use crate::state::saver;
use crate::state::{AppState, MapInfo, SavedMapDocument};

use super::datauri::{parse_data_uri, DataUriPayload};
use super::errors::ExportResult;

/// A complete exported map held in memory
///
/// The non-delivering export variant: nothing is written to a sink, the
/// bundle is consumed programmatically.
#[derive(Debug, Clone)]
pub struct MapBundle {
    /// The serialized map document
    pub map: SavedMapDocument,
    /// Descriptive metadata
    pub info: MapInfo,
    /// Decoded preview image, when one has been captured
    pub thumbnail: Option<DataUriPayload>,
}

/// Assemble the full map bundle from application state
///
/// # Arguments
/// * `state` - Application state to bundle
///
/// # Returns
/// The bundle with the saved map, its info and an optional thumbnail
pub fn export_map_bundle(state: &AppState) -> ExportResult<MapBundle> {
    let map = saver::save(state);

    let thumbnail = match state.ui.preview_image.as_deref() {
        Some(uri) => Some(parse_data_uri(uri)?),
        None => None,
    };

    info!(
        "assembled map bundle: {} datasets, thumbnail: {}",
        map.datasets.len(),
        thumbnail.is_some()
    );

    Ok(MapBundle {
        info: state.info.clone(),
        map,
        thumbnail,
    })
}
