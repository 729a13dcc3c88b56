//! Shared configuration for the formatting helpers.
//!
//! `FormatConfig` centralizes the formatting knobs so the JSON and SQL
//! paths and the CLI flags agree on defaults and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error_codes;

/// Upper bound accepted for `indent_width`.
pub const MAX_INDENT_WIDTH: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Spaces per indentation level.
    pub indent_width: u8,
    /// Render SQL keywords in upper case.
    pub uppercase_keywords: bool,
    /// Blank lines between consecutive SQL statements.
    pub lines_between_statements: u8,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            uppercase_keywords: false,
            lines_between_statements: 1,
        }
    }
}

impl FormatConfig {
    pub fn with_indent(indent_width: u8) -> Self {
        Self {
            indent_width,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 {
            return Err(ConfigError::ZeroIndent);
        }
        if self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::IndentTooWide {
                value: self.indent_width,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("[DEVBELT_CFG_001] indent_width must be greater than zero. Suggestion: pass an indent width between 1 and {MAX_INDENT_WIDTH}.")]
    ZeroIndent,
    #[error("[DEVBELT_CFG_002] indent_width must be at most {MAX_INDENT_WIDTH} (got {value}). Suggestion: pass an indent width between 1 and {MAX_INDENT_WIDTH}.")]
    IndentTooWide { value: u8 },
}

impl ConfigError {
    /// Stable code identifying this error in scripts and logs.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::ZeroIndent => error_codes::CONFIG_ZERO_INDENT,
            ConfigError::IndentTooWide { .. } => error_codes::CONFIG_INDENT_TOO_WIDE,
        }
    }
}
