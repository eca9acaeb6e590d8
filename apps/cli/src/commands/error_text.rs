use common::error_text::{self, ErrorClass};
use common::keyword::registry;
use common::payload::build_minimal_payload;

use std::error::Error;
use std::io::Error as IoError;

use log::debug;

pub fn resolve(message: &str) -> String {
    let status = error_text::resolve_status(message);
    debug!("Resolved {message:?} to {status}");
    status.to_string()
}

pub fn strip(message: &str) -> String {
    error_text::strip_keywords(message)
}

pub fn classify(message: &str) -> String {
    match error_text::classify(message) {
        ErrorClass::Success => String::from("success"),
        ErrorClass::Classified { keyword, status } => format!("classified {keyword} {status}"),
        ErrorClass::Unclassified => String::from("unclassified"),
    }
}

pub fn payload(message: Option<&str>, inner: Option<&str>) -> String {
    let inner = inner.map(IoError::other);
    let bytes = build_minimal_payload(message, inner.as_ref().map(|e| e as &dyn Error));
    String::from_utf8_lossy(&bytes).into_owned()
}

/// One `<token>\t<status>` line per registered keyword.
pub fn keywords() -> String {
    registry()
        .entries()
        .into_iter()
        .map(|(token, status)| format!("{token}\t{status}"))
        .collect::<Vec<_>>()
        .join("\n")
}
