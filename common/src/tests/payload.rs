// Unit tests for the minimal error payload

use crate::payload::{MinimalPayload, build_minimal_payload, parse_minimal_payload};

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};

fn as_str(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap()
}

/// **VALUE**: Message and inner error are joined with ": ".
///
/// **WHY THIS MATTERS**: This is the fallback body when a full response cannot be built;
/// consumers split on the first ": " to show context.
#[test]
fn given_message_and_inner_error_when_building_payload_then_joined() {
    let inner = IoError::new(ErrorKind::TimedOut, "socket read {timeout}");

    let bytes = build_minimal_payload(Some("flash failed"), Some(&inner as &dyn Error));

    assert_eq!(as_str(&bytes), r#"{"err":"flash failed: socket read {timeout}"}"#);
}

/// **VALUE**: With only one side present, that side is the whole error.
#[test]
fn given_one_side_missing_when_building_payload_then_uses_the_other() {
    let inner = IoError::new(ErrorKind::Other, "boom");

    assert_eq!(as_str(&build_minimal_payload(Some("only message"), None)), r#"{"err":"only message"}"#);
    assert_eq!(as_str(&build_minimal_payload(None, Some(&inner as &dyn Error))), r#"{"err":"boom"}"#);
    assert_eq!(as_str(&build_minimal_payload(Some(""), Some(&inner as &dyn Error))), r#"{"err":"boom"}"#);
    assert_eq!(as_str(&build_minimal_payload(None, None)), r#"{"err":""}"#);
}

/// **VALUE**: Quotes, backslashes and control characters are escaped.
///
/// **BUG THIS CATCHES**: Building the payload with `format!` and emitting invalid JSON.
#[test]
fn given_message_needing_escapes_when_building_payload_then_valid_json() {
    let message = "bad \"quote\" \\ and\nnewline";

    let bytes = build_minimal_payload(Some(message), None);

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["err"], message);
    assert_eq!(parse_minimal_payload(&bytes).as_deref(), Some(message));
}

/// **VALUE**: Parsing is best-effort and never fails loudly.
#[test]
fn given_garbage_when_parsing_payload_then_none() {
    assert_eq!(parse_minimal_payload(b"not json"), None);
    assert_eq!(parse_minimal_payload(br#"{"error":"x"}"#), None);
    assert_eq!(
        parse_minimal_payload(br#"{"err":"x","extra":1}"#),
        Some(String::from("x"))
    );
}

#[test]
fn given_payload_struct_when_constructed_then_err_field_set() {
    let payload = MinimalPayload::new(Some("m"), None);
    assert_eq!(payload, MinimalPayload { err: String::from("m") });
}
