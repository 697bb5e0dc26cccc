//! app-files - Entry Point
//!
//! Command-line access to an application's file store.

use log::{error, info};
use std::process::ExitCode;

use app_files::StoreConfig;
use app_files::commands::{Command, CommandStatus, USAGE, handle_command, parse_command};
use app_files::utils::logging::setup_logging;

fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_command(&args);
    if command == Command::Help {
        print!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let config = match StoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let files = match config.open() {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to open store for {}/{}: {}", config.company_name, config.app_name, e);
            return ExitCode::FAILURE;
        }
    };
    info!("Using app root {}", files.app_root_path().display());

    let mut stdout = std::io::stdout().lock();
    match handle_command(&files, command, &mut stdout) {
        CommandStatus::Success => ExitCode::SUCCESS,
        CommandStatus::Failure(_) => ExitCode::FAILURE,
    }
}
