use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use cartokit::commands::{CartokitCommandFactory, CommandFactory};
use cartokit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("CartoKit")
        .version("0.1")
        .about("Export map-visualization state as images, documents and tables")
        .arg(
            Arg::new("input")
                .help("Input state document (JSON)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .help("Export an artifact (image, config, html, data)")
                .value_name("TYPE")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory to deliver exported files into")
                .value_name("DIR")
                .default_value(".")
                .required(false),
        )
        .arg(
            Arg::new("dataset")
                .long("dataset")
                .help("Export only the dataset with this id")
                .value_name("ID")
                .required(false),
        )
        .arg(
            Arg::new("data-type")
                .long("data-type")
                .help("Format for data exports (csv, json, geojson)")
                .value_name("FORMAT")
                .default_value("csv")
                .required(false),
        )
        .arg(
            Arg::new("filtered")
                .long("filtered")
                .help("Export only the rows visible under active filters")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ratio")
                .long("ratio")
                .help("Aspect-ratio preset for image exports (screen, 4:3, 16:9, custom)")
                .value_name("RATIO")
                .default_value("4:3")
                .required(false),
        )
        .arg(
            Arg::new("resolution")
                .long("resolution")
                .help("Resolution preset for image exports (1x, 2x)")
                .value_name("RESOLUTION")
                .default_value("1x")
                .required(false),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .help("Access token to embed in standalone documents")
                .value_name("TOKEN")
                .required(false),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("Interaction mode for standalone documents (read, edit)")
                .value_name("MODE")
                .default_value("read")
                .required(false),
        )
        .arg(
            Arg::new("config-only")
                .long("config-only")
                .help("Export the map configuration without dataset rows")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("presets")
                .long("presets")
                .help("TOML file with additional ratio presets")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "cartokit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let verbose = matches.get_flag("verbose");
    if let Err(e) = Logger::init_global_logger("cartokit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CartokitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
