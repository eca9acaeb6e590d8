pub mod env;
pub mod paths;

pub use env::{EnvLoadResult, load_dotenv, process_env};
pub use paths::{ConfigPaths, PathSource, SETTINGS_FILE_NAME, detect_config_paths};

use crate::DEFAULT_API_URL;
use crate::error::ConfigError;

use common::{ErrorLocation, RedactedToken};

use env::{ENV_ACCESS_TOKEN, ENV_API_URL, ENV_DEVICE_TIMEOUT, ENV_USERNAME};

use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const SETTINGS_VERSION: u32 = 1;
const MAX_DEVICE_TIMEOUT_SECS: u64 = 600;

// ============================================
// SETTINGS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(
        default,
        serialize_with = "RedactedToken::serialize_exposed",
        skip_serializing_if = "Option::is_none"
    )]
    pub access_token: Option<RedactedToken>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_device_timeout_secs")]
    pub device_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            username: None,
            access_token: None,
            api_url: default_api_url(),
            device_timeout_secs: default_device_timeout_secs(),
        }
    }
}

/// Values supplied on the command line. They win over everything else.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub username: Option<String>,
    pub access_token: Option<String>,
    pub api_url: Option<String>,
    pub device_timeout_secs: Option<u64>,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    SETTINGS_VERSION
}
fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_device_timeout_secs() -> u64 {
    30
}

// ============================================
// IMPLEMENTATION
// ============================================

impl Settings {
    /// Load settings from {config_dir}/settings.json.
    ///
    /// # Returns
    ///
    /// Returns defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable or invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let settings_path = config_dir.join(SETTINGS_FILE_NAME);

        if !settings_path.exists() {
            info!(
                "Settings file not found at {}, using defaults",
                settings_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
            warn!("Failed to read settings file: {e}");
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: settings_path.clone(),
                source: e,
            }
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse settings JSON: {e}");
            ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: settings_path.clone(),
                reason: e.to_string(),
            }
        })?;

        settings.validate()?;

        info!("Settings loaded from {}", settings_path.display());
        Ok(settings)
    }

    /// Save settings to {config_dir}/settings.json using temp file + rename.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        let temp_path = config_dir.join(format!("{SETTINGS_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::caller(),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &settings_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::caller(),
            path: settings_path.clone(),
            source: e,
        })?;

        info!("Settings saved to {}", settings_path.display());
        Ok(())
    }

    /// File, then environment, then flags; validated at the end.
    pub fn load_effective(
        config_dir: &Path,
        overrides: &SettingsOverrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Self::load(config_dir)?;
        settings.apply_env(lookup)?;
        settings.apply_overrides(overrides);
        settings.validate()?;
        Ok(settings)
    }

    /// Overlay DEVLINK_* variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the timeout variable is not a number.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            debug!("Access token taken from {ENV_ACCESS_TOKEN} ({} chars)", token.len());
            self.access_token = Some(RedactedToken::new(token));
        }
        if let Some(api_url) = lookup(ENV_API_URL) {
            debug!("API URL taken from {ENV_API_URL}");
            self.api_url = api_url;
        }
        if let Some(username) = lookup(ENV_USERNAME) {
            self.username = Some(username);
        }
        if let Some(raw) = lookup(ENV_DEVICE_TIMEOUT) {
            self.device_timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::validation(format!("{ENV_DEVICE_TIMEOUT} is not a number: {raw}"))
            })?;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(ref token) = overrides.access_token {
            self.access_token = Some(RedactedToken::new(token.clone()));
        }
        if let Some(ref api_url) = overrides.api_url {
            self.api_url = api_url.clone();
        }
        if let Some(ref username) = overrides.username {
            self.username = Some(username.clone());
        }
        if let Some(timeout) = overrides.device_timeout_secs {
            self.device_timeout_secs = timeout;
        }
    }

    /// Validate settings values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > SETTINGS_VERSION {
            return Err(ConfigError::validation(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, SETTINGS_VERSION
            )));
        }

        let url = Url::parse(&self.api_url)
            .map_err(|e| ConfigError::validation(format!("Invalid API URL {}: {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::validation(format!(
                "API URL must be http or https: {}",
                self.api_url
            )));
        }

        if self.device_timeout_secs == 0 || self.device_timeout_secs > MAX_DEVICE_TIMEOUT_SECS {
            return Err(ConfigError::validation(format!(
                "Invalid device timeout: {} (must be 1-{})",
                self.device_timeout_secs, MAX_DEVICE_TIMEOUT_SECS
            )));
        }

        if self.access_token.as_ref().is_some_and(RedactedToken::is_empty) {
            return Err(ConfigError::validation("access token cannot be empty string"));
        }

        Ok(())
    }

    /// The configured access token, or a `{auth}`-tagged error.
    pub fn require_token(&self) -> Result<&RedactedToken, ConfigError> {
        self.access_token.as_ref().ok_or_else(|| {
            ConfigError::missing_token(format!(
                "no access token configured; set {ENV_ACCESS_TOKEN} or log in"
            ))
        })
    }

    /// `Bearer <token>` for the Authorization header.
    pub fn authorization_header(&self) -> Result<String, ConfigError> {
        self.require_token()
            .map(|token| format!("Bearer {}", token.expose()))
    }
}
