use client_core::error::ConfigError;

use common::keyword::INTERNAL;
use common::{ErrorLocation, HttpStatusCode, error_text};

use thiserror::Error;

/// Exit code for errors the user can fix (4xx).
pub const EXIT_USER_ERROR: u8 = 1;

/// Exit code for everything else.
pub const EXIT_INTERNAL_ERROR: u8 = 2;

/// Errors surfaced by CLI commands.
///
/// Printed to the terminal only after keyword stripping; the exit code is
/// derived from the status the unstripped text resolves to.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logger could not be set up
    #[error("Logger Error: {keyword} {message} {location}", keyword = INTERNAL)]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Reading a message from stdin failed
    #[error("Input Error: {keyword} {message} {location}", keyword = INTERNAL)]
    Input {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn status(&self) -> HttpStatusCode {
        error_text::resolve_status(&self.to_string())
    }

    pub fn exit_code(&self) -> u8 {
        if self.status().is_client_error() {
            EXIT_USER_ERROR
        } else {
            EXIT_INTERNAL_ERROR
        }
    }

    /// Text safe to show a person: no wire keywords.
    ///
    /// Every `{...}` segment is removed, including one that is part of a user
    /// path (`/tmp/{proj}/cfg` shows as `/tmp//cfg`). The unstripped text is
    /// logged at debug level by `main`.
    pub fn display_message(&self) -> String {
        error_text::strip_keywords(&self.to_string())
    }
}
