//! Shared runtime pieces for devlink command-line tools.
//!
//! The centre of this crate is the error taxonomy: a closed vocabulary of
//! `{keyword}` tokens ([`keyword`]), the table mapping them to transport status
//! codes ([`KeywordRegistry`]), and the codec that recovers status and a clean
//! message from an otherwise opaque error string ([`error_text`]).
//!
//! ## Architecture
//!
//! - **common** (this crate): error taxonomy, status codes, secrets
//! - **client-core**: configuration boundary (settings file, overrides)
//! - **devlink**: command-line front end wiring everything together

pub mod error;
pub mod error_text;
pub mod http_status;
pub mod keyword;
pub mod payload;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use error_text::{ErrorClass, ErrorText};
pub use http_status::HttpStatusCode;
pub use keyword::{ErrorKeyword, KeywordRegistry};
pub use payload::{MinimalPayload, build_minimal_payload};
pub use redacted_token::RedactedToken;
