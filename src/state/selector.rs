//! Dataset selection for data exports

use log::debug;

use super::types::Dataset;

/// Select the datasets a data export should cover
///
/// When `selected_id` names an existing dataset the result contains
/// exactly that one; otherwise it contains every dataset in collection
/// order. An empty result signals "nothing to export" and callers treat
/// it as a no-op, not an error.
///
/// # Arguments
/// * `datasets` - The dataset collection, in its iteration order
/// * `selected_id` - Optional identifier of a single dataset to export
///
/// # Returns
/// References to the selected datasets, ordered
pub fn select_datasets<'a>(datasets: &'a [Dataset], selected_id: Option<&str>) -> Vec<&'a Dataset> {
    if let Some(id) = selected_id {
        if let Some(dataset) = datasets.iter().find(|d| d.id == id) {
            return vec![dataset];
        }
        debug!("no dataset with id '{}', exporting all datasets", id);
    }

    datasets.iter().collect()
}
