//! Image export orchestration

use log::info;

use crate::state::AppState;
use crate::utils::filename::DEFAULT_IMAGE_FILE;

use super::datauri::parse_data_uri;
use super::errors::ExportResult;
use super::payload::NamedPayload;

/// Produce the image payload from the captured preview in UI state
///
/// The preview must have been captured upstream; an absent preview is a
/// precondition the caller has not satisfied yet, so the export is a
/// no-op rather than an error. A malformed preview URI is an error.
///
/// # Arguments
/// * `state` - Application state holding the captured preview
///
/// # Returns
/// The decoded image payload under the default image file name, or None
/// when no preview has been captured
pub fn export_image_payload(state: &AppState) -> ExportResult<Option<NamedPayload>> {
    let Some(uri) = state.ui.preview_image.as_deref() else {
        info!("no captured preview image in state, skipping image export");
        return Ok(None);
    };

    let decoded = parse_data_uri(uri)?;
    info!(
        "decoded preview image: {} bytes, {}",
        decoded.bytes.len(),
        decoded.mime_type
    );

    Ok(Some(NamedPayload::new(
        DEFAULT_IMAGE_FILE,
        decoded.mime_type,
        decoded.bytes,
    )))
}
