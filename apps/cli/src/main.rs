use devlink::cli::Cli;
use devlink::commands;
use devlink::logger::initialize as LoggerInitialize;

use client_core::config::{load_dotenv, process_env};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger FIRST
    if let Err(e) = LoggerInitialize(cli.global.log_level(), cli.global.log_file.as_deref()) {
        eprintln!("error: {}", e.display_message());
        return ExitCode::from(e.exit_code());
    }

    let env = load_dotenv();
    if let Some(path) = env.path {
        info!("Environment loaded from {}", path.display());
    }

    match commands::run(&cli, process_env) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Command failed with {}: {e}", e.status());
            eprintln!("error: {}", e.display_message());
            ExitCode::from(e.exit_code())
        }
    }
}
