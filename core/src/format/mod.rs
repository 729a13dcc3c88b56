//! Text normalization in front of the diff engine.
//!
//! Inputs are pretty-printed here first so the positional comparison sees
//! stable line shapes. JSON parse failures reject the operation; the SQL
//! formatter is lexer-based and tolerant, so SQL never rejects.

mod json;
mod sql;

pub use json::{format_json, minify_json};
pub use sql::{format_sql, minify_sql};

use crate::error_codes;
use thiserror::Error;

/// Errors produced by the formatting helpers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("[DEVBELT_FMT_001] invalid JSON: {message}. Suggestion: fix the syntax error at the reported position and retry.")]
    InvalidJson { message: String },
}

impl FormatError {
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::InvalidJson { .. } => error_codes::FMT_INVALID_JSON,
        }
    }
}
