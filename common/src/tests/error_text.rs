// Unit tests for the error text codec
// Covers resolution, tie-break, stripping, and graceful handling of malformed text

use crate::error_text::{
    classify, contains, display_string, error_contains, first_keyword, resolve_error_status,
    resolve_status, strip_keywords, with_keyword,
};
use crate::keyword::{self, KeywordRegistry};
use crate::{ErrorClass, ErrorText, HttpStatusCode};

use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct FakeError(&'static str);

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for FakeError {}

fn timeout_auth_registry() -> KeywordRegistry {
    let mut registry = KeywordRegistry::new();
    registry
        .register("{timeout}", HttpStatusCode::REQUEST_TIMEOUT)
        .register("{auth}", HttpStatusCode::UNAUTHORIZED);
    registry
}

// ============================================
// RESOLUTION
// ============================================

/// **VALUE**: The two canonical scenarios resolve and strip as documented.
///
/// **WHY THIS MATTERS**: These are the shapes producers actually emit: keyword at the end,
/// and keyword in the middle of a sentence.
///
/// **BUG THIS CATCHES**: Off-by-one in the span extraction or the one-space trim.
#[test]
fn given_timeout_and_auth_registered_when_resolving_scenarios_then_status_and_clean_text_match() {
    // GIVEN: A registry with {timeout} -> 408 and {auth} -> 401
    let registry = timeout_auth_registry();
    let codec = ErrorText::new(&registry);

    // WHEN / THEN: keyword at the end
    let message = "request failed {timeout}";
    assert_eq!(codec.resolve_status(message), HttpStatusCode(408));
    assert_eq!(strip_keywords(message), "request failed");

    // WHEN / THEN: keyword mid-sentence
    let message = "invalid credentials {auth} on retry";
    assert_eq!(codec.resolve_status(message), HttpStatusCode(401));
    assert_eq!(strip_keywords(message), "invalid credentials on retry");
}

/// **VALUE**: Every catalog keyword resolves to its catalog status wherever it sits.
///
/// **WHY THIS MATTERS**: The process-wide registry is what every consumer uses. A keyword
/// missing from `standard()` silently turns into a 500.
///
/// **BUG THIS CATCHES**: A constant added to the catalog file but not to `STANDARD_KEYWORDS`.
#[test]
fn given_standard_catalog_when_keyword_embedded_anywhere_then_resolves_to_its_status() {
    for (keyword, status) in keyword::STANDARD_KEYWORDS {
        // GIVEN: Prefix and suffix text around the keyword
        let message = format!("device said no {keyword} (attempt 3)");

        // WHEN / THEN
        assert_eq!(resolve_status(&message), *status, "keyword {keyword}");
        assert_eq!(resolve_status(keyword.as_str()), *status, "bare {keyword}");
    }
}

/// **VALUE**: The leftmost keyword decides the status.
///
/// **WHY THIS MATTERS**: Producers append the most specific keyword first; wrapping layers
/// may add their own later in the string.
///
/// **BUG THIS CATCHES**: Scanning from the right, or picking the highest/lowest status.
#[test]
fn given_two_registered_keywords_when_resolving_then_leftmost_wins() {
    let registry = timeout_auth_registry();
    let codec = ErrorText::new(&registry);

    assert_eq!(codec.resolve_status("a {timeout} b {auth}"), HttpStatusCode(408));
    assert_eq!(codec.resolve_status("a {auth} b {timeout}"), HttpStatusCode(401));
}

/// **VALUE**: Empty text means "no error".
///
/// **WHY THIS MATTERS**: Callers pass the display string of an optional error straight in.
///
/// **BUG THIS CATCHES**: Treating empty as unclassified and reporting 500 for success.
#[test]
fn given_empty_message_when_resolving_then_returns_success() {
    assert_eq!(resolve_status(""), HttpStatusCode::OK);
    assert_eq!(classify(""), ErrorClass::Success);
    assert_eq!(resolve_error_status(None), HttpStatusCode::OK);
}

/// **VALUE**: Unstructured, unknown and malformed text all fold into 500.
///
/// **WHY THIS MATTERS**: There is no "parse failure" class; the codec must never panic or
/// invent a third outcome.
///
/// **BUG THIS CATCHES**: Slicing past the end when `}` is missing, or pairing a `}` that
/// precedes the `{`.
#[test]
fn given_unclassifiable_text_when_resolving_then_returns_internal_error() {
    let cases = [
        "plain failure with no keyword",
        "well formed but {unknown-token}",
        "unbalanced {open-only",
        "close } before {open",
        "} only a closing brace",
        "{",
        "}{",
    ];

    for message in cases {
        assert_eq!(
            resolve_status(message),
            HttpStatusCode::INTERNAL_SERVER_ERROR,
            "message {message:?}"
        );
        assert_eq!(classify(message), ErrorClass::Unclassified);
    }
}

/// **VALUE**: Only the leftmost token is considered, even when it is unknown.
///
/// **WHY THIS MATTERS**: Resolution is one lookup, not a search for any known keyword.
///
/// **BUG THIS CATCHES**: Falling through to a later registered keyword.
#[test]
fn given_unknown_leftmost_token_when_known_follows_then_still_internal_error() {
    assert_eq!(
        resolve_status("{unknown-token} then {timeout}"),
        HttpStatusCode::INTERNAL_SERVER_ERROR
    );
}

/// **VALUE**: A `}` that appears before the first `{` is skipped, not paired.
///
/// **BUG THIS CATCHES**: Searching for the close brace from the start of the string.
#[test]
fn given_stray_close_before_keyword_when_resolving_then_keyword_still_found() {
    assert_eq!(first_keyword("oops } then {timeout}"), Some("{timeout}"));
    assert_eq!(resolve_status("oops } then {timeout}"), HttpStatusCode(408));
}

/// **VALUE**: Resolution is repeatable and does not depend on call history.
#[test]
fn given_same_message_when_resolved_twice_then_results_match() {
    let message = "upload rejected {too-big} {timeout}";
    assert_eq!(resolve_status(message), resolve_status(message));
    assert_eq!(resolve_status(message), HttpStatusCode::PAYLOAD_TOO_LARGE);
}

/// **VALUE**: A codec bound to an empty registry classifies nothing.
///
/// **BUG THIS CATCHES**: `ErrorText::new` quietly falling back to the global registry.
#[test]
fn given_empty_registry_when_resolving_catalog_keyword_then_internal_error() {
    let registry = KeywordRegistry::new();
    let codec = ErrorText::new(&registry);

    assert_eq!(
        codec.resolve_status("request failed {timeout}"),
        HttpStatusCode::INTERNAL_SERVER_ERROR
    );
}

/// **VALUE**: Classification exposes the matched token alongside its status.
#[test]
fn given_classified_message_when_classifying_then_reports_keyword_and_status() {
    let class = classify("no such device {device-noexist}");

    assert_eq!(
        class,
        ErrorClass::Classified {
            keyword: "{device-noexist}",
            status: HttpStatusCode::NOT_FOUND,
        }
    );
    assert_eq!(class.status(), HttpStatusCode::NOT_FOUND);
}

// ============================================
// STRIPPING
// ============================================

/// **VALUE**: Stripping removes every keyword, not just the first.
///
/// **WHY THIS MATTERS**: Display code strips before showing text to a human; a leaked
/// `{keyword}` is a visible bug.
#[test]
fn given_several_keywords_when_stripping_then_all_removed() {
    assert_eq!(strip_keywords("a {timeout} b {auth}"), "a b");
    assert_eq!(strip_keywords("{auth} leading"), "leading");
    assert_eq!(strip_keywords("{timeout}"), "");
}

/// **VALUE**: Text without keywords passes through unchanged.
#[test]
fn given_plain_text_when_stripping_then_unchanged() {
    assert_eq!(strip_keywords("nothing to see here"), "nothing to see here");
    assert_eq!(strip_keywords(""), "");
}

/// **VALUE**: Trailing whitespace survives when there is nothing to strip.
///
/// **WHY THIS MATTERS**: Stripping is display cleanup for keywords only. Messages that
/// carry no keyword must reach the user byte-for-byte.
///
/// **BUG THIS CATCHES**: A blanket `trim_end` applied to every message.
#[test]
fn given_plain_text_with_trailing_whitespace_when_stripping_then_unchanged() {
    assert_eq!(strip_keywords("disk full  "), "disk full  ");
    assert_eq!(strip_keywords("line ends here\n"), "line ends here\n");
}

/// **VALUE**: The text kept after an unclosed brace is returned exactly as it was.
///
/// **BUG THIS CATCHES**: Trimming the remainder after the scan stops.
#[test]
fn given_unbalanced_brace_with_trailing_whitespace_when_stripping_then_remainder_verbatim() {
    assert_eq!(strip_keywords("bad {open-only \n"), "bad {open-only \n");
    assert_eq!(
        strip_keywords("cut {timeout} keep {open  "),
        "cut keep {open  "
    );
}

/// **VALUE**: Only a keyword that ends the message takes the space before it.
#[test]
fn given_keyword_at_end_when_stripping_then_only_one_preceding_space_removed() {
    assert_eq!(strip_keywords("human text {timeout}"), "human text");
    assert_eq!(strip_keywords("double  {timeout}"), "double ");
    assert_eq!(strip_keywords("tail {timeout} "), "tail ");
    assert_eq!(strip_keywords("glued{timeout}"), "glued");
}

/// **VALUE**: An unclosed brace stops the scan and keeps the remainder.
///
/// **WHY THIS MATTERS**: Malformed input must terminate and must not eat the rest of the
/// message.
///
/// **BUG THIS CATCHES**: An infinite loop re-finding the same `{`, or truncating at it.
#[test]
fn given_unbalanced_brace_when_stripping_then_terminates_and_keeps_remainder() {
    assert_eq!(strip_keywords("unbalanced {open-only"), "unbalanced {open-only");
    assert_eq!(
        strip_keywords("gone {timeout} then {broken"),
        "gone then {broken"
    );
}

/// **VALUE**: Stripping twice equals stripping once.
#[test]
fn given_any_message_when_stripped_twice_then_idempotent() {
    let cases = [
        "request failed {timeout}",
        "invalid credentials {auth} on retry",
        "a {timeout} b {auth}",
        "unbalanced {open-only",
        "{{nested} inner}",
        "}{ weird {x}  double",
        "trailing spaces   ",
        "",
    ];

    for message in cases {
        let once = strip_keywords(message);
        assert_eq!(strip_keywords(&once), once, "message {message:?}");
    }

    assert_eq!(strip_keywords("trailing spaces   "), "trailing spaces   ");
}

/// **VALUE**: Producer helper and stripper round-trip the human text.
#[test]
fn given_phrase_tagged_with_keyword_when_stripped_then_phrase_recovered() {
    let message = with_keyword("human text", keyword::TIMEOUT);

    assert_eq!(message, "human text {timeout}");
    assert_eq!(strip_keywords(&message), "human text");
    assert_eq!(resolve_status(&message), HttpStatusCode::REQUEST_TIMEOUT);
    assert_eq!(with_keyword("", keyword::AUTH), "{auth}");
}

// ============================================
// CONTAINS / DISPLAY
// ============================================

/// **VALUE**: `contains` is a plain substring test.
#[test]
fn given_message_when_checking_contains_then_substring_semantics() {
    assert!(contains("request failed {timeout}", keyword::TIMEOUT));
    assert!(!contains("request failed {timeout}", keyword::AUTH));
    assert!(!contains("request timed out", keyword::TIMEOUT));
    assert!(contains("x {auth}", "{auth}"));
}

/// **VALUE**: An absent error never contains a keyword and renders as "".
///
/// **BUG THIS CATCHES**: Panicking or formatting "None" for a missing error.
#[test]
fn given_absent_error_when_checked_and_displayed_then_false_and_empty() {
    assert!(!error_contains(None, keyword::TIMEOUT));
    assert_eq!(display_string(None), "");

    let err = FakeError("socket closed {timeout}");
    assert!(error_contains(Some(&err as &dyn Error), keyword::TIMEOUT));
    assert_eq!(display_string(Some(&err as &dyn Error)), "socket closed {timeout}");
    assert_eq!(resolve_error_status(Some(&err as &dyn Error)), HttpStatusCode::REQUEST_TIMEOUT);
}
