use client_core::config::env::{ENV_ACCESS_TOKEN, ENV_API_URL};
use client_core::config::{SETTINGS_FILE_NAME, Settings, SettingsOverrides};
use client_core::error::ConfigError;

use common::{HttpStatusCode, RedactedToken};

use tempfile::TempDir;

// ============================================================================
// Public API tests for the settings file
// These test the PUBLIC interface from an external consumer's perspective
// ============================================================================

/// **VALUE**: A missing settings file yields defaults, not an error.
///
/// **WHY THIS MATTERS**: First run of any CLI tool has no settings yet.
///
/// **BUG THIS CATCHES**: Propagating the NotFound from `read_to_string`.
#[test]
fn given_empty_dir_when_load_called_then_returns_defaults() {
    // GIVEN: An empty config directory
    let dir = TempDir::new().unwrap();

    // WHEN: Loading
    let settings = Settings::load(dir.path()).unwrap();

    // THEN: Defaults
    assert_eq!(settings.api_url, client_core::DEFAULT_API_URL);
    assert!(settings.access_token.is_none());
}

/// **VALUE**: Saved settings load back, token included.
///
/// **WHY THIS MATTERS**: The token is the one field that refuses plain serialization; the
/// settings file must use the explicit escape hatch or logins are lost.
#[test]
fn given_saved_settings_when_loaded_then_values_survive() {
    // GIVEN: Settings with a token and username
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        username: Some(String::from("ada")),
        access_token: Some(RedactedToken::new("tok-123")),
        device_timeout_secs: 45,
        ..Settings::default()
    };

    // WHEN: Saving then loading
    settings.save(dir.path()).unwrap();
    let loaded = Settings::load(dir.path()).unwrap();

    // THEN: Everything round-trips and no temp file remains
    assert_eq!(loaded.username.as_deref(), Some("ada"));
    assert_eq!(loaded.access_token.as_ref().map(|t| t.expose()), Some("tok-123"));
    assert_eq!(loaded.device_timeout_secs, 45);
    assert!(!dir.path().join(format!("{SETTINGS_FILE_NAME}.tmp")).exists());
}

/// **VALUE**: A corrupt file is a `{not-json}` parse error resolving to 400.
///
/// **BUG THIS CATCHES**: Quietly replacing a user's hand-edited file with defaults.
#[test]
fn given_corrupt_file_when_loaded_then_parse_error_resolves_to_400() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "{ not json").unwrap();

    let err = Settings::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.status(), HttpStatusCode::BAD_REQUEST);
}

/// **VALUE**: Invalid settings are never written.
#[test]
fn given_invalid_settings_when_saved_then_nothing_written() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        api_url: String::from("not a url"),
        ..Settings::default()
    };

    let err = settings.save(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(!dir.path().join(SETTINGS_FILE_NAME).exists());
}

/// **VALUE**: File < env < flags, end to end.
#[test]
fn given_file_env_and_flags_when_loading_effective_then_precedence_holds() {
    // GIVEN: A file with a token and URL
    let dir = TempDir::new().unwrap();
    Settings {
        access_token: Some(RedactedToken::new("file-token")),
        api_url: String::from("https://file.example.com"),
        ..Settings::default()
    }
    .save(dir.path())
    .unwrap();

    // AND: Env overriding both, a flag overriding the URL again
    let lookup = |name: &str| match name {
        ENV_ACCESS_TOKEN => Some(String::from("env-token")),
        ENV_API_URL => Some(String::from("https://env.example.com")),
        _ => None,
    };
    let overrides = SettingsOverrides {
        api_url: Some(String::from("https://flag.example.com")),
        ..SettingsOverrides::default()
    };

    // WHEN
    let settings = Settings::load_effective(dir.path(), &overrides, lookup).unwrap();

    // THEN
    assert_eq!(settings.access_token.as_ref().map(|t| t.expose()), Some("env-token"));
    assert_eq!(settings.api_url, "https://flag.example.com");
}

/// **VALUE**: A flag producing an invalid value fails validation after layering.
#[test]
fn given_invalid_flag_when_loading_effective_then_validation_error() {
    let dir = TempDir::new().unwrap();
    let overrides = SettingsOverrides {
        device_timeout_secs: Some(0),
        ..SettingsOverrides::default()
    };

    let err = Settings::load_effective(dir.path(), &overrides, |_| None).unwrap_err();

    assert_eq!(err.status(), HttpStatusCode::BAD_REQUEST);
}
