mod config;
mod error;
