//! Devbelt: a toolbox of small developer utilities behind one library API.
//!
//! This crate provides functionality for:
//! - Comparing two texts line by line (`compute_diff`)
//! - Formatting and minifying JSON and SQL (`format`)
//! - Converting between Unix timestamps and datetimes (`timestamp`)
//! - Previewing and describing cron expressions (`cron`)
//! - Running regular expressions with match offsets (`regex`)
//! - Inferring and validating JSON Schemas (`schema`)
//! - Decoding JWTs without verification (`jwt`)
//!
//! # Quick Start
//!
//! ```
//! use devbelt::{FormatConfig, compute_diff};
//!
//! let config = FormatConfig::default();
//! let left = devbelt::format::format_json(r#"{"a":1}"#, &config)?;
//! let right = devbelt::format::format_json(r#"{"a":2}"#, &config)?;
//!
//! let result = compute_diff(&left, &right);
//! assert!(result.has_changes());
//! # Ok::<(), devbelt::format::FormatError>(())
//! ```

mod config;
mod diff;

pub mod cron;
pub mod error_codes;
pub mod format;
pub mod jwt;
pub mod regex;
pub mod schema;
pub mod timestamp;

pub use config::{ConfigError, FormatConfig, MAX_INDENT_WIDTH};
pub use diff::{DiffResult, DiffStats, LineKind, LineRecord, compute_diff};
