//! Fallback error body for when a full structured response cannot be built.
//!
//! Wire shape is `{"err":"<message>"}`. Consumers treat it as best-effort
//! JSON, not a validated schema.

use serde::{Deserialize, Serialize};
use std::error::Error;

use log::warn;

/// Emitted if serde_json ever refuses the payload.
const EMPTY_PAYLOAD: &[u8] = br#"{"err":""}"#;

/// Single-field error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimalPayload {
    pub err: String,
}

impl MinimalPayload {
    /// `"message: inner"` when both are present, otherwise whichever one is.
    pub fn new(message: Option<&str>, inner: Option<&dyn Error>) -> Self {
        let message = message.filter(|message| !message.is_empty());
        let inner = inner.map(|inner| inner.to_string());

        let err = match (message, inner) {
            (Some(message), Some(inner)) => format!("{message}: {inner}"),
            (Some(message), None) => message.to_owned(),
            (None, Some(inner)) => inner,
            (None, None) => String::new(),
        };

        Self { err }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|e| {
            warn!("Failed to serialize minimal error payload: {e}");
            EMPTY_PAYLOAD.to_vec()
        })
    }
}

/// Serialized [`MinimalPayload`] combining an optional message and inner error.
pub fn build_minimal_payload(message: Option<&str>, inner: Option<&dyn Error>) -> Vec<u8> {
    MinimalPayload::new(message, inner).to_bytes()
}

/// The `err` field of a payload, or `None` if the bytes are not one.
pub fn parse_minimal_payload(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<MinimalPayload>(bytes)
        .ok()
        .map(|payload| payload.err)
}
