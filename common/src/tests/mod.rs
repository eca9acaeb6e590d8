mod error_text;
mod payload;
