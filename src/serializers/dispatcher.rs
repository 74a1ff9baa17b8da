//! Per-dataset format dispatch
//!
//! Applies the requested row filtering, invokes the serializer matching
//! the requested data type and names the resulting payload.

use log::{debug, info};

use crate::export::errors::ExportResult;
use crate::export::payload::NamedPayload;
use crate::state::Dataset;
use crate::utils::filename;

use super::factory::{DataType, SerializerFactory};

/// Serialize one dataset into a named payload
///
/// With `filtered` set, only the rows referenced by the dataset's filter
/// indices are serialized, in index order. A data type with no wired
/// serializer yields `Ok(None)`.
///
/// The file name is deterministic (`cartokit_<label>.<ext>`); two datasets
/// sharing a label produce the same name, and disambiguation is the
/// caller's responsibility.
///
/// # Arguments
/// * `dataset` - The dataset to serialize
/// * `data_type` - Requested export format
/// * `filtered` - Whether to restrict output to the filtered row set
///
/// # Returns
/// The named payload, or None when no serializer is wired for the type
pub fn export_dataset(
    dataset: &Dataset,
    data_type: DataType,
    filtered: bool,
) -> ExportResult<Option<NamedPayload>> {
    let Some(serializer) = SerializerFactory::create(data_type) else {
        debug!(
            "no serializer wired for data type '{}', skipping dataset '{}'",
            data_type.name(),
            dataset.id
        );
        return Ok(None);
    };

    let rows = dataset.rows_for_export(filtered);
    info!(
        "serializing dataset '{}' as {}: {} rows, {} fields (filtered: {})",
        dataset.id,
        serializer.name(),
        rows.len(),
        dataset.fields.len(),
        filtered
    );

    let bytes = serializer.serialize(&rows, &dataset.fields)?;
    let file_name = filename::data_file_name(&dataset.label, serializer.extension());

    Ok(Some(NamedPayload::new(
        file_name,
        serializer.mime_type(),
        bytes,
    )))
}
