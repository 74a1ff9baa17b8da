//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod describe_command;
pub mod export_command;

pub use command_traits::{Command, CommandFactory};
pub use describe_command::DescribeCommand;
pub use export_command::{ExportCommand, ExportType};

use std::fs;

use clap::ArgMatches;
use log::info;

use crate::export::errors::ExportResult;
use crate::geometry::PresetRegistry;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CartokitCommandFactory;

impl CartokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CartokitCommandFactory
    }
}

impl Default for CartokitCommandFactory {
    fn default() -> Self {
        CartokitCommandFactory::new()
    }
}

impl<'a> CommandFactory<'a> for CartokitCommandFactory {
    fn create_command(
        &self,
        args: &ArgMatches,
        logger: &'a Logger,
    ) -> ExportResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.contains_id("export") {
            Ok(Box::new(ExportCommand::new(args, logger)?))
        } else {
            // Default to describe command
            Ok(Box::new(DescribeCommand::new(args, logger)?))
        }
    }
}

/// Build the preset registry, extended from a TOML file when given
pub(crate) fn build_registry(presets_file: Option<&str>) -> ExportResult<PresetRegistry> {
    let mut registry = PresetRegistry::built_in().clone();
    if let Some(path) = presets_file {
        info!("loading additional ratio presets from {}", path);
        let content = fs::read_to_string(path)?;
        registry.extend_from_toml_str(&content)?;
    }
    Ok(registry)
}
