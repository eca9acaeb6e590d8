//! Reading structure back out of error strings.
//!
//! Errors cross process and network boundaries as plain text. Producers append
//! a keyword token (see [`crate::keyword`]) to a human-readable phrase; this
//! module is the only place that knows how to find it again. Nothing here
//! returns an error: malformed text degrades to the generic internal-error
//! status or is passed through untouched, so formatting an error can never
//! become a new source of failure.
//!
//! ```
//! use common::error_text::{resolve_status, strip_keywords};
//! use common::HttpStatusCode;
//!
//! let message = "request failed {timeout}";
//! assert_eq!(resolve_status(message), HttpStatusCode::REQUEST_TIMEOUT);
//! assert_eq!(strip_keywords(message), "request failed");
//! ```

use crate::HttpStatusCode;
use crate::keyword::{ErrorKeyword, KEYWORD_CLOSE, KEYWORD_OPEN, KeywordRegistry, registry};

use std::error::Error;

/// How a message falls into the error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass<'m> {
    /// Empty message: there was no error.
    Success,
    /// Leftmost keyword is registered.
    Classified {
        keyword: &'m str,
        status: HttpStatusCode,
    },
    /// Anything else, including unbalanced or unknown tokens.
    Unclassified,
}

impl ErrorClass<'_> {
    pub fn status(&self) -> HttpStatusCode {
        match self {
            ErrorClass::Success => HttpStatusCode::OK,
            ErrorClass::Classified { status, .. } => *status,
            ErrorClass::Unclassified => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Codec bound to a particular registry.
///
/// Most callers want the module-level functions, which use the process-wide
/// registry. Tests and embedders with their own vocabulary build one of these.
#[derive(Debug, Clone, Copy)]
pub struct ErrorText<'r> {
    registry: &'r KeywordRegistry,
}

impl<'r> ErrorText<'r> {
    pub const fn new(registry: &'r KeywordRegistry) -> Self {
        Self { registry }
    }

    pub fn global() -> ErrorText<'static> {
        ErrorText::new(registry())
    }

    /// Status for `message`, decided by its leftmost keyword only.
    ///
    /// Empty text is success. A missing or unbalanced delimiter, or a token
    /// the registry does not know, is an internal error.
    pub fn resolve_status(&self, message: &str) -> HttpStatusCode {
        self.classify(message).status()
    }

    pub fn classify<'m>(&self, message: &'m str) -> ErrorClass<'m> {
        if message.is_empty() {
            return ErrorClass::Success;
        }

        first_keyword(message)
            .and_then(|keyword| {
                self.registry
                    .status_of(keyword)
                    .map(|status| ErrorClass::Classified { keyword, status })
            })
            .unwrap_or(ErrorClass::Unclassified)
    }

    /// Status for an optional error value; `None` is success.
    pub fn resolve_error_status(&self, err: Option<&dyn Error>) -> HttpStatusCode {
        self.resolve_status(&display_string(err))
    }
}

/// Leftmost `{...}` span, delimiters included.
///
/// The closing brace is searched for from the opening one onward, so a `}`
/// that precedes every `{` never pairs with anything.
pub fn first_keyword(message: &str) -> Option<&str> {
    let open = message.find(KEYWORD_OPEN)?;
    let close = open + message[open..].find(KEYWORD_CLOSE)?;
    Some(&message[open..=close])
}

/// Literal substring test. No delimiter awareness, no normalization.
pub fn contains(message: &str, keyword: impl AsRef<str>) -> bool {
    message.contains(keyword.as_ref())
}

/// [`contains`] over an optional error; `None` never contains anything.
pub fn error_contains(err: Option<&dyn Error>, keyword: impl AsRef<str>) -> bool {
    err.is_some_and(|err| contains(&err.to_string(), keyword))
}

/// Resolve against the process-wide registry.
pub fn resolve_status(message: &str) -> HttpStatusCode {
    ErrorText::global().resolve_status(message)
}

pub fn resolve_error_status(err: Option<&dyn Error>) -> HttpStatusCode {
    ErrorText::global().resolve_error_status(err)
}

pub fn classify(message: &str) -> ErrorClass<'_> {
    ErrorText::global().classify(message)
}

/// Remove every keyword span so the message can be shown to a person.
///
/// Each `{...}` is cut together with one space that directly follows it. A
/// span that ends the string takes the one space before it instead, so
/// `"human text {k}"` becomes `"human text"` and `"a {k} b"` becomes `"a b"`.
/// Text without keywords comes back unchanged. An opening brace with no
/// closing brace after it stops the scan and the rest is kept verbatim.
pub fn strip_keywords(message: &str) -> String {
    let mut clean = message.to_owned();

    while let Some(open) = clean.find(KEYWORD_OPEN) {
        let Some(close) = clean[open..].find(KEYWORD_CLOSE) else {
            break;
        };

        let mut start = open;
        let mut end = open + close + KEYWORD_CLOSE.len_utf8();
        if clean[end..].starts_with(' ') {
            end += 1;
        } else if end == clean.len() && clean[..open].ends_with(' ') {
            start -= 1;
        }
        clean.replace_range(start..end, "");
    }

    clean
}

/// `Display` text of an optional error, `""` when there is none.
pub fn display_string(err: Option<&dyn Error>) -> String {
    err.map(|err| err.to_string()).unwrap_or_default()
}

/// Producer side: `"phrase {keyword}"`.
pub fn with_keyword(phrase: &str, keyword: ErrorKeyword) -> String {
    if phrase.is_empty() {
        keyword.to_string()
    } else {
        format!("{phrase} {keyword}")
    }
}
