//! Keyword -> status table.
//!
//! Populated in one explicit initialization phase, read-only afterwards. The
//! process-wide instance lives behind a `Lazy` so it is fully built before the
//! first lookup and can be read from any thread without further locking.

use super::STANDARD_KEYWORDS;
use crate::HttpStatusCode;

use std::borrow::Cow;
use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

static REGISTRY: Lazy<KeywordRegistry> = Lazy::new(KeywordRegistry::standard);

/// Process-wide registry holding the standard keyword catalog.
pub fn registry() -> &'static KeywordRegistry {
    &REGISTRY
}

/// Mapping from literal keyword token (delimiters included) to status.
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    entries: HashMap<Cow<'static, str>, HttpStatusCode>,
}

impl KeywordRegistry {
    /// Empty registry. Every lookup misses until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the full standard catalog.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for (keyword, status) in STANDARD_KEYWORDS {
            registry.register(*keyword, *status);
        }
        debug!("Keyword registry initialized with {} entries", registry.len());
        registry
    }

    /// Insert or overwrite the status for `keyword`. Last write wins.
    pub fn register(
        &mut self,
        keyword: impl Into<Cow<'static, str>>,
        status: impl Into<HttpStatusCode>,
    ) -> &mut Self {
        let keyword = keyword.into();
        let status = status.into();
        if let Some(previous) = self.entries.insert(keyword.clone(), status) {
            debug!("Keyword {keyword} re-registered: {previous} -> {status}");
        }
        self
    }

    /// Status registered for the exact token, if any.
    pub fn status_of(&self, token: &str) -> Option<HttpStatusCode> {
        self.entries.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by status, then token.
    pub fn entries(&self) -> Vec<(&str, HttpStatusCode)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(token, status)| (&**token, *status))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
