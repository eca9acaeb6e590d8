//! Where the settings file lives.
//!
//! Lookup order:
//! 1. `--config-dir` command-line flag
//! 2. DEVLINK_CONFIG_DIR environment variable (explicit override)
//! 3. Platform config directory via `dirs` crate
//! 4. `~/.devlink` as a last resort

use super::env::ENV_CONFIG_DIR;
use crate::APP_NAME;
use crate::error::ConfigError;

use std::path::PathBuf;

use log::{debug, info};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// How the config directory was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Supplied on the command line.
    Flag,
    /// Set via DEVLINK_CONFIG_DIR.
    EnvVar,
    /// Platform config directory.
    PlatformDefault,
    /// `~/.devlink`.
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::Flag => write!(f, "command-line flag"),
            PathSource::EnvVar => write!(f, "{ENV_CONFIG_DIR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "home fallback"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    pub settings_file: PathBuf,
    pub source: PathSource,
}

impl ConfigPaths {
    fn new(config_dir: PathBuf, source: PathSource) -> Self {
        let settings_file = config_dir.join(SETTINGS_FILE_NAME);
        Self {
            config_dir,
            settings_file,
            source,
        }
    }
}

/// Resolve the config directory.
///
/// # Errors
/// Returns `ConfigError::DirectoryNotFound` if neither the platform config
/// directory nor a home directory can be determined.
pub fn detect_config_paths(
    flag: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ConfigPaths, ConfigError> {
    if let Some(dir) = flag {
        debug!("Using config dir from flag: {}", dir.display());
        return Ok(ConfigPaths::new(dir, PathSource::Flag));
    }

    if let Some(custom_dir) = lookup(ENV_CONFIG_DIR) {
        info!("Using {ENV_CONFIG_DIR} override: {custom_dir}");
        return Ok(ConfigPaths::new(PathBuf::from(custom_dir), PathSource::EnvVar));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(ConfigPaths::new(
            config_dir.join(APP_NAME),
            PathSource::PlatformDefault,
        ));
    }

    dirs::home_dir()
        .map(|home| ConfigPaths::new(home.join(format!(".{APP_NAME}")), PathSource::HomeFallback))
        .ok_or_else(|| {
            ConfigError::directory_not_found("no platform config directory and no home directory")
        })
}
