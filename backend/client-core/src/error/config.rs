//! Errors raised by the configuration layer.
//!
//! Each variant embeds a keyword from the shared vocabulary right after its
//! header, so the rendered text still resolves to a status after it has been
//! flattened into a string and sent elsewhere.

use common::keyword::{AUTH, INTERNAL, INVALID_ARGS, NOT_FOUND, NOT_JSON};
use common::{ErrorLocation, HttpStatusCode, error_text};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {keyword} {path}: {source} {location}", keyword = INTERNAL)]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {keyword} {path}: {reason} {location}", keyword = NOT_JSON)]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Write Error: {keyword} {path}: {source} {location}", keyword = INTERNAL)]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Directory Not Found Error: {keyword} {reason} {location}", keyword = NOT_FOUND)]
    DirectoryNotFound {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Serialization Error: {keyword} {reason} {location}", keyword = INTERNAL)]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Validation Error: {keyword} {reason} {location}", keyword = INVALID_ARGS)]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Missing Access Token Error: {keyword} {reason} {location}", keyword = AUTH)]
    MissingToken {
        location: ErrorLocation,
        reason: String,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            location: ErrorLocation::caller(),
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn missing_token(reason: impl Into<String>) -> Self {
        ConfigError::MissingToken {
            location: ErrorLocation::caller(),
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn directory_not_found(reason: impl Into<String>) -> Self {
        ConfigError::DirectoryNotFound {
            location: ErrorLocation::caller(),
            reason: reason.into(),
        }
    }

    /// Status recovered from the rendered message.
    pub fn status(&self) -> HttpStatusCode {
        error_text::resolve_status(&self.to_string())
    }
}
