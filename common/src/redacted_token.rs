//! Access tokens that never show up in logs, debug output or error text.

use crate::{ErrorLocation, RedactError};

use std::fmt;

use serde::de::Deserializer;
use serde::ser::{Error, Serializer};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Cloud access token with redacted `Debug`/`Display`, zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedToken {
    inner: String,
}

impl RedactedToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// The actual token value.
    ///
    /// # Security Note
    /// Only call this when building a request header or writing the settings file.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Token length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `serialize_with` hook for the one place the raw token may be persisted.
    pub fn serialize_exposed<S>(token: &Option<RedactedToken>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match token {
            Some(token) => serializer.serialize_some(token.expose()),
            None => serializer.serialize_none(),
        }
    }
}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedToken([REDACTED])")
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TOKEN]")
    }
}

impl Drop for RedactedToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

// Accidental serialization is an error; see `serialize_exposed`.
impl Serialize for RedactedToken {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom(RedactError::Exposure {
            secret: "RedactedToken",
            escape_hatch: "RedactedToken::serialize_exposed",
            location: ErrorLocation::caller(),
        }))
    }
}

impl<'de> Deserialize<'de> for RedactedToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(RedactedToken::new)
    }
}
