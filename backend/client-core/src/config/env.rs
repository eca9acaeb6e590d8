//! Environment variable layer.

use const_format::concatcp;
use log::debug;

use std::path::PathBuf;

pub const ENV_PREFIX: &str = "DEVLINK_";
pub const ENV_ACCESS_TOKEN: &str = concatcp!(ENV_PREFIX, "ACCESS_TOKEN");
pub const ENV_API_URL: &str = concatcp!(ENV_PREFIX, "API_URL");
pub const ENV_USERNAME: &str = concatcp!(ENV_PREFIX, "USERNAME");
pub const ENV_DEVICE_TIMEOUT: &str = concatcp!(ENV_PREFIX, "DEVICE_TIMEOUT_SECS");
pub const ENV_CONFIG_DIR: &str = concatcp!(ENV_PREFIX, "CONFIG_DIR");

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to loaded .env file, if found.
    pub path: Option<PathBuf>,
    /// Whether any .env file was loaded.
    pub loaded: bool,
}

/// Load `.env` from the working directory or its ancestors. Missing is fine.
pub fn load_dotenv() -> EnvLoadResult {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded .env from {}", path.display());
            EnvLoadResult {
                path: Some(path),
                loaded: true,
            }
        }
        Err(e) => {
            debug!("No .env loaded: {e}");
            EnvLoadResult {
                path: None,
                loaded: false,
            }
        }
    }
}

/// Lookup against the real process environment. Empty values count as unset.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
