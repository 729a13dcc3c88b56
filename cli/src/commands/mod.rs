pub mod cron;
pub mod diff;
pub mod fmt;
pub mod jwt;
pub mod regex;
pub mod schema;
pub mod timestamp;

use anyhow::{Context, Result};
use std::io::Read;

/// Read a positional input, treating `-` as stdin.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}
