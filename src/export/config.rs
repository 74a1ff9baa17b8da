//! Config document export orchestration

use log::info;

use crate::state::saver;
use crate::state::AppState;
use crate::utils::filename::DEFAULT_CONFIG_FILE;

use super::errors::ExportResult;
use super::payload::{mime, NamedPayload};

/// Serialize application state into the config document payload
///
/// With `has_full_data` set the payload carries the full saved map
/// (config plus row data); otherwise only the visual configuration is
/// written.
///
/// # Arguments
/// * `state` - Application state to serialize
/// * `has_full_data` - Whether to include dataset rows
///
/// # Returns
/// The JSON document payload under the default config file name
pub fn export_config_payload(state: &AppState, has_full_data: bool) -> ExportResult<NamedPayload> {
    let bytes = if has_full_data {
        serde_json::to_vec_pretty(&saver::save(state))?
    } else {
        serde_json::to_vec_pretty(&saver::config_only(state))?
    };

    info!(
        "serialized {} document: {} bytes",
        if has_full_data { "full map" } else { "config-only" },
        bytes.len()
    );

    Ok(NamedPayload::new(DEFAULT_CONFIG_FILE, mime::JSON, bytes))
}
