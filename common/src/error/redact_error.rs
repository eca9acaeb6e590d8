use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret is about to leave the process through serde.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Exposure Error: refusing to serialize {secret}; call {escape_hatch} explicitly {location}")]
    Exposure {
        secret: &'static str,
        escape_hatch: &'static str,
        location: ErrorLocation,
    },
}
