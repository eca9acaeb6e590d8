use client_core::error::ConfigError;

use common::error_text::{classify, strip_keywords};
use common::{ErrorClass, ErrorLocation, HttpStatusCode};

use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;

/// **VALUE**: Each ConfigError variant resolves to the status its keyword maps to.
///
/// **WHY THIS MATTERS**: These errors are flattened to strings before they reach other
/// tools. The keyword in the text is the only structured information that survives.
///
/// **BUG THIS CATCHES**: A variant whose format string drops or misplaces its keyword.
#[test]
fn given_each_config_error_when_resolved_then_maps_to_expected_status() {
    let location = ErrorLocation::caller();
    let path = PathBuf::from("/tmp/settings.json");

    let cases = [
        (
            ConfigError::ReadError {
                location,
                path: path.clone(),
                source: IoError::new(ErrorKind::PermissionDenied, "denied"),
            },
            HttpStatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            ConfigError::ParseError {
                location,
                path: path.clone(),
                reason: String::from("expected value at line 1"),
            },
            HttpStatusCode::BAD_REQUEST,
        ),
        (
            ConfigError::directory_not_found("nowhere"),
            HttpStatusCode::NOT_FOUND,
        ),
        (
            ConfigError::validation("bad"),
            HttpStatusCode::BAD_REQUEST,
        ),
        (
            ConfigError::missing_token("none"),
            HttpStatusCode::UNAUTHORIZED,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.status(), expected, "{err}");
        assert!(matches!(classify(&err.to_string()), ErrorClass::Classified { .. }));
    }
}

/// **VALUE**: Stripped error text reads cleanly and keeps its location.
///
/// **WHY THIS MATTERS**: The CLI strips before printing. A leftover `{keyword}` or a
/// swallowed location would both be visible regressions.
#[test]
fn given_config_error_when_stripped_then_no_keyword_and_location_kept() {
    let err = ConfigError::validation("Invalid device timeout: 0 (must be 1-600)");

    let clean = strip_keywords(&err.to_string());

    assert!(clean.starts_with("Config Validation Error: Invalid device timeout"), "{clean}");
    assert!(!clean.contains('{'));
    assert!(clean.contains("config.rs"), "location should survive: {clean}");
}
