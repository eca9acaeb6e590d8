//! Command dispatch. Every command returns its stdout text so tests can
//! check it without spawning the binary.

pub mod config;
pub mod error_text;

use crate::cli::{Cli, Command};
use crate::error::CliError;

use common::ErrorLocation;

use std::io::Read;

/// Run the parsed command line. `lookup` reads environment variables.
pub fn run(cli: &Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<String, CliError> {
    match &cli.command {
        Command::Resolve { message } => {
            Ok(error_text::resolve(&message_or_stdin(message.as_deref())?))
        }
        Command::Strip { message } => {
            Ok(error_text::strip(&message_or_stdin(message.as_deref())?))
        }
        Command::Classify { message } => {
            Ok(error_text::classify(&message_or_stdin(message.as_deref())?))
        }
        Command::Payload { message, inner } => {
            Ok(error_text::payload(message.as_deref(), inner.as_deref()))
        }
        Command::Keywords => Ok(error_text::keywords()),
        Command::Config(command) => config::run(*command, &cli.global, lookup),
    }
}

fn message_or_stdin(message: Option<&str>) -> Result<String, CliError> {
    if let Some(message) = message {
        return Ok(message.to_owned());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CliError::Input {
            message: String::from("Failed to read message from stdin"),
            location: ErrorLocation::caller(),
            source: e,
        })?;

    // Drop the newline a shell pipe adds; it is not part of the message.
    Ok(buffer.trim_end_matches(['\n', '\r']).to_owned())
}
