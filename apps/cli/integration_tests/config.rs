use devlink::cli::Cli;
use devlink::commands::run;
use devlink::error::EXIT_USER_ERROR;

use client_core::config::Settings;
use common::RedactedToken;

use clap::Parser;
use tempfile::TempDir;

// ============================================================================
// End-to-end tests through the public command surface
// ============================================================================

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("devlink").chain(args.iter().copied())).unwrap()
}

/// **VALUE**: `config check` succeeds once a token is stored in the settings file.
///
/// **WHY THIS MATTERS**: This is the path every CLI tool takes before its first cloud call.
#[test]
fn given_saved_token_when_config_check_then_ok() {
    // GIVEN: A settings file with a token
    let dir = TempDir::new().unwrap();
    Settings {
        access_token: Some(RedactedToken::new("stored-token")),
        ..Settings::default()
    }
    .save(dir.path())
    .unwrap();

    // WHEN
    let cli = parse(&["config", "check", "--config-dir", dir.path().to_str().unwrap()]);
    let output = run(&cli, |_| None).unwrap();

    // THEN
    assert_eq!(output, "ok");
}

/// **VALUE**: A corrupt settings file surfaces as a clean, keyword-free user error.
///
/// **BUG THIS CATCHES**: `{not-json}` leaking into terminal output, or a parse failure
/// mapped to exit code 2.
#[test]
fn given_corrupt_settings_when_config_show_then_clean_user_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("settings.json"), "[1, 2").unwrap();

    let cli = parse(&["config", "show", "--config-dir", dir.path().to_str().unwrap()]);
    let err = run(&cli, |_| None).unwrap_err();

    assert_eq!(err.exit_code(), EXIT_USER_ERROR);
    let message = err.display_message();
    assert!(message.starts_with("Config Parse Error: "), "{message}");
    assert!(!message.contains("{not-json}"));
}

#[test]
fn given_config_dir_flag_when_config_path_then_prints_settings_file() {
    let dir = TempDir::new().unwrap();

    let cli = parse(&["config", "path", "--config-dir", dir.path().to_str().unwrap()]);
    let output = run(&cli, |_| None).unwrap();

    assert_eq!(output, dir.path().join("settings.json").display().to_string());
}

/// **VALUE**: The payload command output is valid JSON carrying the joined text.
#[test]
fn given_payload_args_when_run_then_valid_json() {
    let cli = parse(&["payload", "--message", "ota \"failed\"", "--inner", "too big {too-big}"]);

    let output = run(&cli, |_| None).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["err"], "ota \"failed\": too big {too-big}");
}
