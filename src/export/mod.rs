//! Export orchestration
//!
//! This module holds the shared export artifacts (errors, payloads, data
//! URIs) and the orchestrators that turn application state into named
//! byte payloads for each target format.

pub mod bundle;
pub mod config;
pub mod data;
pub mod datauri;
pub mod errors;
pub mod html;
pub mod image;
pub mod payload;
mod tests;

pub use bundle::{export_map_bundle, MapBundle};
pub use config::export_config_payload;
pub use data::{export_data_payloads, DataExportRequest};
pub use datauri::{parse_data_uri, to_data_uri, DataUriPayload};
pub use errors::{ExportError, ExportResult};
pub use html::export_standalone_document_payload;
pub use image::export_image_payload;
pub use payload::{mime, NamedPayload};
