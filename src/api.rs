use std::fmt::Write as _;
use std::fs;

use log::{info, warn};

use crate::delivery::{DeliverySink, FileSink};
use crate::document::StandaloneDocumentOptions;
use crate::export::errors::ExportResult;
use crate::export::{
    export_config_payload, export_data_payloads, export_image_payload, export_map_bundle,
    export_standalone_document_payload, parse_data_uri, DataExportRequest, MapBundle,
};
use crate::geometry::{calculate_export_image_size, scale_from_image_size, PresetRegistry};
use crate::serializers::{DataSerializer, SerializerFactory};
use crate::state::AppState;
use crate::utils::logger::Logger;

/// Main interface to the CartoKit library
pub struct CartoKit {
    logger: Logger,
    registry: PresetRegistry,
}

impl CartoKit {
    /// Create a new CartoKit instance with the built-in preset registry
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "cartokit.log"
    ///
    /// # Returns
    /// A CartoKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExportResult<Self> {
        CartoKit::with_registry(log_file, PresetRegistry::built_in().clone())
    }

    /// Create a new CartoKit instance with an explicit preset registry
    pub fn with_registry(log_file: Option<&str>, registry: PresetRegistry) -> ExportResult<Self> {
        let log_path = log_file.unwrap_or("cartokit.log");
        let logger = Logger::new(log_path)?;
        Ok(CartoKit { logger, registry })
    }

    /// Preset registry used by the geometry-dependent operations
    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Load an application-state snapshot from a JSON file
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    ///
    /// # Returns
    /// The deserialized state or an error
    pub fn load_state(&self, state_path: &str) -> ExportResult<AppState> {
        info!("loading application state from {}", state_path);
        let bytes = fs::read(state_path)?;
        let state: AppState = serde_json::from_slice(&bytes)?;
        info!(
            "state loaded: {} datasets, {} layers, {} filters",
            state.datasets.len(),
            state.config.layers.len(),
            state.config.filters.len()
        );
        Ok(state)
    }

    /// Summarize a state document and the export geometry it would produce
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    /// * `ratio_id` - Ratio preset to use for the geometry summary
    /// * `resolution_id` - Resolution preset to use for the geometry summary
    ///
    /// # Returns
    /// String containing the summary or an error
    pub fn describe(
        &self,
        state_path: &str,
        ratio_id: &str,
        resolution_id: &str,
    ) -> ExportResult<String> {
        let state = self.load_state(state_path)?;

        let mut result = String::from("Map Export State:\n");
        let _ = writeln!(result, "  Title: {}", display_or(&state.info.title, "(untitled)"));
        let _ = writeln!(result, "  Datasets: {}", state.datasets.len());

        for dataset in &state.datasets {
            let _ = writeln!(
                result,
                "    '{}' ({}): {} rows ({} filtered), {} fields",
                dataset.label,
                dataset.id,
                dataset.all_rows.len(),
                dataset.filtered_row_indices.len(),
                dataset.fields.len()
            );
        }

        let _ = writeln!(
            result,
            "  Layers: {}, Filters: {}",
            state.config.layers.len(),
            state.config.filters.len()
        );

        let formats: Vec<&str> = SerializerFactory::available()
            .iter()
            .map(|s| s.name())
            .collect();
        let _ = writeln!(result, "  Data formats: {}", formats.join(", "));
        let _ = writeln!(
            result,
            "  Map surface: {}x{}",
            state.ui.map_width, state.ui.map_height
        );

        match state.ui.preview_image.as_deref() {
            Some(uri) => match parse_data_uri(uri) {
                Ok(preview) => match image::load_from_memory(&preview.bytes) {
                    Ok(img) => {
                        let _ = writeln!(
                            result,
                            "  Preview: {}x{} ({}, {} bytes)",
                            img.width(),
                            img.height(),
                            preview.mime_type,
                            preview.bytes.len()
                        );
                    }
                    Err(e) => {
                        let _ = writeln!(
                            result,
                            "  Preview: {} bytes of {} (not decodable: {})",
                            preview.bytes.len(),
                            preview.mime_type,
                            e
                        );
                    }
                },
                Err(e) => {
                    let _ = writeln!(result, "  Preview: malformed data URI ({})", e);
                }
            },
            None => {
                let _ = writeln!(result, "  Preview: not captured");
            }
        }

        match calculate_export_image_size(
            state.ui.map_width,
            state.ui.map_height,
            ratio_id,
            resolution_id,
            &self.registry,
        ) {
            Some(geometry) => {
                let _ = writeln!(
                    result,
                    "  Export geometry ({} @ {}): {}x{}, scale {}",
                    ratio_id,
                    resolution_id,
                    geometry.image_width,
                    geometry.image_height,
                    geometry
                        .scale
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "custom".to_string())
                );
            }
            None => {
                let _ = writeln!(
                    result,
                    "  Export geometry: unavailable (map surface has no area)"
                );
            }
        }

        Ok(result)
    }

    /// Export the captured preview image to a file
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    /// * `out_dir` - Directory to deliver the image into
    /// * `ratio_id` - Ratio preset the capture was requested with
    /// * `resolution_id` - Resolution preset the capture was requested with
    ///
    /// # Returns
    /// Whether a payload was delivered (false when no preview is captured)
    pub fn export_image(
        &self,
        state_path: &str,
        out_dir: &str,
        ratio_id: &str,
        resolution_id: &str,
    ) -> ExportResult<bool> {
        let state = self.load_state(state_path)?;

        if let Some(geometry) = calculate_export_image_size(
            state.ui.map_width,
            state.ui.map_height,
            ratio_id,
            resolution_id,
            &self.registry,
        ) {
            info!(
                "requested export geometry: {}x{} (scale: {:?})",
                geometry.image_width, geometry.image_height, geometry.scale
            );
        }

        let Some(payload) = export_image_payload(&state)? else {
            return Ok(false);
        };

        match image::load_from_memory(&payload.bytes) {
            Ok(img) => {
                let overlay_scale = scale_from_image_size(
                    img.width() as i32,
                    img.height() as i32,
                    state.ui.map_width,
                    state.ui.map_height,
                );
                info!(
                    "captured image is {}x{}, overlay scale {}",
                    img.width(),
                    img.height(),
                    overlay_scale
                );
            }
            Err(e) => warn!("captured preview is not a decodable image: {}", e),
        }

        let mut sink = FileSink::new(out_dir);
        sink.deliver(&payload)?;
        self.logger.log("Image export successful")?;
        Ok(true)
    }

    /// Export the map configuration document to a file
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    /// * `out_dir` - Directory to deliver the document into
    /// * `has_full_data` - Whether to include dataset rows
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn export_config(
        &self,
        state_path: &str,
        out_dir: &str,
        has_full_data: bool,
    ) -> ExportResult<()> {
        let state = self.load_state(state_path)?;
        let payload = export_config_payload(&state, has_full_data)?;

        let mut sink = FileSink::new(out_dir);
        sink.deliver(&payload)?;
        self.logger.log("Config export successful")?;
        Ok(())
    }

    /// Export the standalone interactive document to a file
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    /// * `out_dir` - Directory to deliver the document into
    /// * `options` - Token overlay and mode options
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn export_html(
        &self,
        state_path: &str,
        out_dir: &str,
        options: &StandaloneDocumentOptions,
    ) -> ExportResult<()> {
        let state = self.load_state(state_path)?;
        let payload = export_standalone_document_payload(&state, options)?;

        let mut sink = FileSink::new(out_dir);
        sink.deliver(&payload)?;
        self.logger.log("Standalone document export successful")?;
        Ok(())
    }

    /// Export dataset tables to files
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    /// * `out_dir` - Directory to deliver the tables into
    /// * `request` - Selection, format and filtering options
    ///
    /// # Returns
    /// Number of payloads delivered (zero means nothing was exported)
    pub fn export_data(
        &self,
        state_path: &str,
        out_dir: &str,
        request: &DataExportRequest,
    ) -> ExportResult<usize> {
        let state = self.load_state(state_path)?;
        let payloads = export_data_payloads(&state, request)?;

        let mut sink = FileSink::new(out_dir);
        for payload in &payloads {
            sink.deliver(payload)?;
        }

        self.logger
            .log(&format!("Data export delivered {} payloads", payloads.len()))?;
        Ok(payloads.len())
    }

    /// Assemble the full map bundle in memory
    ///
    /// # Arguments
    /// * `state_path` - Path to the serialized state document
    ///
    /// # Returns
    /// The bundle with the saved map, its info and an optional thumbnail
    pub fn export_bundle(&self, state_path: &str) -> ExportResult<MapBundle> {
        let state = self.load_state(state_path)?;
        export_map_bundle(&state)
    }
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
