//! Error keywords: short `{lowercase-hyphenated}` tokens that producers embed
//! in free-text error messages so consumers on the far side of a process or
//! network boundary can recover a status code.
//!
//! The literal tokens are a cross-process contract. Adding one is backward
//! compatible; renaming or removing one breaks every consumer matching on it.

pub mod catalog;
pub mod registry;

pub use catalog::*;
pub use registry::{KeywordRegistry, registry};

use std::borrow::Cow;
use std::fmt;

/// Opening delimiter of an embedded keyword.
pub const KEYWORD_OPEN: char = '{';

/// Closing delimiter of an embedded keyword.
pub const KEYWORD_CLOSE: char = '}';

/// A single token from the keyword vocabulary, delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorKeyword(&'static str);

impl ErrorKeyword {
    /// Wrap a literal token. The caller supplies the braces: `ErrorKeyword::new("{timeout}")`.
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Token without its delimiters, e.g. `timeout` for `{timeout}`.
    pub fn name(&self) -> &'static str {
        self.0
            .strip_prefix(KEYWORD_OPEN)
            .and_then(|rest| rest.strip_suffix(KEYWORD_CLOSE))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for ErrorKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for ErrorKeyword {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl From<ErrorKeyword> for Cow<'static, str> {
    fn from(keyword: ErrorKeyword) -> Self {
        Cow::Borrowed(keyword.0)
    }
}
