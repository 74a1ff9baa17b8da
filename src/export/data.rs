//! Data export orchestration

use log::info;

use crate::serializers::{export_dataset, DataType};
use crate::state::{select_datasets, AppState};
use crate::utils::filename::FileNameAllocator;

use super::errors::ExportResult;
use super::payload::NamedPayload;

/// A data export request as constructed by the caller per export action
#[derive(Debug, Clone)]
pub struct DataExportRequest {
    /// Identifier of a single dataset to export; empty exports all
    pub selected_dataset: Option<String>,
    /// Requested export format
    pub data_type: DataType,
    /// Whether to restrict output to each dataset's filtered row set
    pub filtered: bool,
}

/// Serialize the selected datasets into named payloads
///
/// One payload is produced per selected dataset with a wired serializer;
/// each is delivered independently by the caller. An empty result means
/// "nothing exported" and is not an error. Datasets sharing a label get
/// numeric suffixes within this one aggregate export; across separate
/// calls names stay deterministic and collisions are the caller's
/// concern.
///
/// # Arguments
/// * `state` - Application state holding the dataset collection
/// * `request` - Selection, format and filtering options
///
/// # Returns
/// The payloads for every selected dataset, in selection order
pub fn export_data_payloads(
    state: &AppState,
    request: &DataExportRequest,
) -> ExportResult<Vec<NamedPayload>> {
    let selected = select_datasets(&state.datasets, request.selected_dataset.as_deref());
    if selected.is_empty() {
        info!("nothing to export: dataset collection is empty");
        return Ok(Vec::new());
    }

    let mut names = FileNameAllocator::new();
    let mut payloads = Vec::new();

    for dataset in selected {
        if let Some(mut payload) = export_dataset(dataset, request.data_type, request.filtered)? {
            payload.file_name = names.allocate(&payload.file_name);
            payloads.push(payload);
        }
    }

    if payloads.is_empty() {
        info!(
            "nothing exported: no serializer wired for data type '{}'",
            request.data_type.name()
        );
    }

    Ok(payloads)
}
