//! CSV row serializer

use std::fmt::Write;

use serde_json::Value;

use crate::export::errors::{ExportError, ExportResult};
use crate::export::payload::mime;
use crate::state::{Field, Row};

use super::serializer::DataSerializer;

/// Serializes a row set as comma-separated values
///
/// Writes one header line from the field names, then one line per row.
/// Cells are quoted when they contain a delimiter, quote or line break;
/// quotes inside a quoted cell are doubled. Rows shorter than the field
/// list are padded with empty cells; surplus cells are dropped.
pub struct CsvSerializer;

impl DataSerializer for CsvSerializer {
    fn serialize(&self, rows: &[&Row], fields: &[Field]) -> ExportResult<Vec<u8>> {
        let mut out = String::new();

        let header = fields
            .iter()
            .map(|f| escape_cell(&f.name))
            .collect::<Vec<_>>()
            .join(",");
        writeln!(out, "{}", header).map_err(|e| ExportError::GenericError(e.to_string()))?;

        for row in rows {
            let line = (0..fields.len())
                .map(|i| escape_cell(&format_cell(row.get(i))))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{}", line).map_err(|e| ExportError::GenericError(e.to_string()))?;
        }

        Ok(out.into_bytes())
    }

    fn name(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        mime::CSV
    }
}

/// Render one cell value as text
fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Quote a cell when its content requires it
fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
