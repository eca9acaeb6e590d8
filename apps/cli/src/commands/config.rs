use crate::cli::{ConfigCommand, GlobalOpts};
use crate::error::CliError;

use client_core::config::{ConfigPaths, Settings, detect_config_paths};

use log::{debug, info};

pub fn run(
    command: ConfigCommand,
    global: &GlobalOpts,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, CliError> {
    let paths = detect_config_paths(global.config_dir.clone(), &lookup)?;
    info!(
        "Using config dir {} ({})",
        paths.config_dir.display(),
        paths.source
    );

    match command {
        ConfigCommand::Path => Ok(paths.settings_file.display().to_string()),
        ConfigCommand::Show => {
            let settings = Settings::load_effective(&paths.config_dir, &global.overrides(), &lookup)?;
            Ok(render(&paths, &settings))
        }
        ConfigCommand::Check => {
            let settings = Settings::load_effective(&paths.config_dir, &global.overrides(), &lookup)?;
            let header = settings.authorization_header()?;
            debug!("Authorization header ready ({} chars)", header.len());
            Ok(String::from("ok"))
        }
    }
}

fn render(paths: &ConfigPaths, settings: &Settings) -> String {
    let token = match &settings.access_token {
        Some(token) => format!("{token} ({} chars)", token.len()),
        None => String::from("(none)"),
    };

    [
        format!("settings_file: {} ({})", paths.settings_file.display(), paths.source),
        format!("api_url: {}", settings.api_url),
        format!(
            "username: {}",
            settings.username.as_deref().unwrap_or("(none)")
        ),
        format!("device_timeout_secs: {}", settings.device_timeout_secs),
        format!("access_token: {token}"),
    ]
    .join("\n")
}
