//! Row serializer trait definition

use crate::export::errors::ExportResult;
use crate::state::{Field, Row};

/// Strategy trait for serializing a row set into an export format
pub trait DataSerializer: Send + Sync {
    /// Serialize the rows under the given column descriptors
    fn serialize(&self, rows: &[&Row], fields: &[Field]) -> ExportResult<Vec<u8>>;

    /// Get the name of this format
    fn name(&self) -> &'static str;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;

    /// Get the MIME type for this format
    fn mime_type(&self) -> &'static str;
}
