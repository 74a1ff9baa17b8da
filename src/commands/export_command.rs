//! Export command
//!
//! This module implements the command driving the export operations:
//! image, config document, standalone document and dataset tables.

use clap::ArgMatches;
use log::info;

use crate::api::CartoKit;
use crate::commands::command_traits::Command;
use crate::document::{DocumentMode, StandaloneDocumentOptions, PUBLIC_ACCESS_TOKEN};
use crate::export::errors::{ExportError, ExportResult};
use crate::export::DataExportRequest;
use crate::serializers::DataType;
use crate::utils::logger::Logger;

/// Export target selected on the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    Image,
    Config,
    Html,
    Data,
}

impl ExportType {
    /// Parse an export type from its CLI name
    pub fn from_name(name: &str) -> Option<ExportType> {
        match name.to_lowercase().as_str() {
            "image" => Some(ExportType::Image),
            "config" => Some(ExportType::Config),
            "html" => Some(ExportType::Html),
            "data" => Some(ExportType::Data),
            _ => None,
        }
    }
}

/// Command for exporting application state into deliverable artifacts
pub struct ExportCommand<'a> {
    /// Path to the state document
    input_file: String,
    /// Directory payloads are delivered into
    output_dir: String,
    /// Which artifact to export
    export_type: ExportType,
    /// Optional single dataset to export
    dataset: Option<String>,
    /// Requested data format for table exports
    data_type: DataType,
    /// Whether table exports cover only the filtered row set
    filtered: bool,
    /// Ratio preset identifier
    ratio: String,
    /// Resolution preset identifier
    resolution: String,
    /// Explicit access token for standalone documents
    token: Option<String>,
    /// Interaction mode for standalone documents
    mode: DocumentMode,
    /// Whether config export omits dataset rows
    config_only: bool,
    /// Optional TOML file with additional ratio presets
    presets_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExportCommand<'a> {
    /// Create a new export command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExportCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExportResult<Self> {
        info!("creating new export command from arguments");

        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ExportError::GenericError("Missing input state file".to_string()))?
            .clone();
        info!("input state file: {}", input_file);

        let export_name = args
            .get_one::<String>("export")
            .ok_or_else(|| ExportError::GenericError("Missing export type".to_string()))?;
        let export_type = ExportType::from_name(export_name).ok_or_else(|| {
            ExportError::GenericError(format!(
                "Unknown export type '{}', expected image, config, html or data",
                export_name
            ))
        })?;
        info!("export type: {:?}", export_type);

        let output_dir = args
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| ".".to_string());
        info!("output directory: {}", output_dir);

        let dataset = args.get_one::<String>("dataset").cloned();
        info!("selected dataset: {:?}", dataset);

        let data_type_name = args
            .get_one::<String>("data-type")
            .cloned()
            .unwrap_or_else(|| "csv".to_string());
        let data_type = DataType::from_name(&data_type_name).ok_or_else(|| {
            ExportError::GenericError(format!("Unknown data type '{}'", data_type_name))
        })?;

        let filtered = args.get_flag("filtered");

        let ratio = args
            .get_one::<String>("ratio")
            .cloned()
            .unwrap_or_else(|| "4:3".to_string());
        let resolution = args
            .get_one::<String>("resolution")
            .cloned()
            .unwrap_or_else(|| "1x".to_string());

        let token = args.get_one::<String>("token").cloned();

        let mode_name = args
            .get_one::<String>("mode")
            .cloned()
            .unwrap_or_else(|| "read".to_string());
        let mode = DocumentMode::from_name(&mode_name).ok_or_else(|| {
            ExportError::GenericError(format!(
                "Unknown document mode '{}', expected read or edit",
                mode_name
            ))
        })?;

        let config_only = args.get_flag("config-only");
        let presets_file = args.get_one::<String>("presets").cloned();

        Ok(ExportCommand {
            input_file,
            output_dir,
            export_type,
            dataset,
            data_type,
            filtered,
            ratio,
            resolution,
            token,
            mode,
            config_only,
            presets_file,
            logger,
        })
    }
}

impl<'a> Command for ExportCommand<'a> {
    fn execute(&self) -> ExportResult<()> {
        info!("executing export command ({:?})", self.export_type);

        let registry = super::build_registry(self.presets_file.as_deref())?;
        let api = CartoKit::with_registry(Some("cartokit.log"), registry)?;

        match self.export_type {
            ExportType::Image => {
                let delivered = api.export_image(
                    &self.input_file,
                    &self.output_dir,
                    &self.ratio,
                    &self.resolution,
                )?;
                if delivered {
                    println!("Image exported to {}", self.output_dir);
                } else {
                    println!("No captured preview image in state, nothing to export");
                }
            }
            ExportType::Config => {
                api.export_config(&self.input_file, &self.output_dir, !self.config_only)?;
                println!("Config document exported to {}", self.output_dir);
            }
            ExportType::Html => {
                let options = StandaloneDocumentOptions {
                    user_token: self.token.clone(),
                    fallback_token: PUBLIC_ACCESS_TOKEN.to_string(),
                    mode: self.mode,
                };
                api.export_html(&self.input_file, &self.output_dir, &options)?;
                println!("Standalone document exported to {}", self.output_dir);
            }
            ExportType::Data => {
                let request = DataExportRequest {
                    selected_dataset: self.dataset.clone(),
                    data_type: self.data_type,
                    filtered: self.filtered,
                };
                let delivered = api.export_data(&self.input_file, &self.output_dir, &request)?;
                if delivered == 0 {
                    println!("Nothing exported");
                } else {
                    println!("Exported {} dataset file(s) to {}", delivered, self.output_dir);
                }
            }
        }

        self.logger.log("Export command successful")?;
        Ok(())
    }
}
