//! Command-line surface.

use crate::logger::level_for_verbosity;

use client_core::config::SettingsOverrides;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "devlink")]
#[command(author, version, about = "Inspect devlink error strings and settings", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug, Default)]
pub struct GlobalOpts {
    /// Override config directory
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Override the cloud API URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override the username
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Override the device timeout (seconds)
    #[arg(long, global = true)]
    pub device_timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl GlobalOpts {
    pub fn log_level(&self) -> LevelFilter {
        level_for_verbosity(self.verbose)
    }

    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            username: self.username.clone(),
            access_token: None,
            api_url: self.api_url.clone(),
            device_timeout_secs: self.device_timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the status code an error message resolves to
    Resolve {
        /// Error message; read from stdin when omitted
        message: Option<String>,
    },

    /// Print an error message with its keywords removed
    Strip {
        /// Error message; read from stdin when omitted
        message: Option<String>,
    },

    /// Print whether an error message is classified, and by which keyword
    Classify {
        /// Error message; read from stdin when omitted
        message: Option<String>,
    },

    /// Print a minimal {"err": ...} payload
    Payload {
        /// Caller-supplied context
        #[arg(long)]
        message: Option<String>,

        /// Text of the underlying error
        #[arg(long)]
        inner: Option<String>,
    },

    /// List every known keyword and its status
    Keywords,

    /// Inspect effective settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print effective settings (token redacted)
    Show,
    /// Validate settings and require an access token
    Check,
    /// Print the settings file location
    Path,
}
