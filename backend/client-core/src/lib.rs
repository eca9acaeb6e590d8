//! Configuration boundary for devlink command-line tools.
//!
//! Reads and writes the JSON settings file, layers environment variables and
//! command-line flags on top, and hands out the access token used for
//! request headers. Error resolution lives in `common` and reads none of this.

pub mod config;
pub mod error;


pub const APP_NAME: &str = "devlink";
pub const DEFAULT_API_URL: &str = "https://api.devlink.io";
