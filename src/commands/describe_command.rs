//! State description command
//!
//! This module implements the default command: summarize a state
//! document, its datasets, the captured preview and the export geometry
//! the current preset selection would produce.

use clap::ArgMatches;
use log::info;

use crate::api::CartoKit;
use crate::commands::command_traits::Command;
use crate::export::errors::{ExportError, ExportResult};
use crate::utils::logger::Logger;

/// Command for summarizing a state document
pub struct DescribeCommand<'a> {
    /// Path to the state document
    input_file: String,
    /// Ratio preset for the geometry summary
    ratio: String,
    /// Resolution preset for the geometry summary
    resolution: String,
    /// Optional TOML file with additional ratio presets
    presets_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DescribeCommand<'a> {
    /// Create a new describe command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DescribeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExportResult<Self> {
        let input_file = args
            .get_one::<String>("input")
            .ok_or_else(|| ExportError::GenericError("Missing input state file".to_string()))?
            .clone();

        let ratio = args
            .get_one::<String>("ratio")
            .cloned()
            .unwrap_or_else(|| "4:3".to_string());

        let resolution = args
            .get_one::<String>("resolution")
            .cloned()
            .unwrap_or_else(|| "1x".to_string());

        let presets_file = args.get_one::<String>("presets").cloned();

        Ok(DescribeCommand {
            input_file,
            ratio,
            resolution,
            presets_file,
            logger,
        })
    }
}

impl<'a> Command for DescribeCommand<'a> {
    fn execute(&self) -> ExportResult<()> {
        info!("describing state document {}", self.input_file);

        let registry = super::build_registry(self.presets_file.as_deref())?;
        let api = CartoKit::with_registry(Some("cartokit.log"), registry)?;

        let summary = api.describe(&self.input_file, &self.ratio, &self.resolution)?;
        println!("{}", summary);

        self.logger.log("State description successful")?;
        Ok(())
    }
}
