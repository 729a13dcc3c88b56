use super::FormatError;
use crate::config::FormatConfig;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-print a JSON document with the configured indent width.
///
/// Key order is preserved as written, so reformatting never reorders an
/// object. Blank input formats to the empty string.
pub fn format_json(input: &str, config: &FormatConfig) -> Result<String, FormatError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse(input)?;
    let indent = " ".repeat(config.indent_width as usize);
    let mut buf = Vec::with_capacity(input.len() * 2);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| FormatError::InvalidJson {
            message: e.to_string(),
        })?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Re-emit a JSON document with all insignificant whitespace removed.
pub fn minify_json(input: &str) -> Result<String, FormatError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|e| FormatError::InvalidJson {
        message: e.to_string(),
    })
}

fn parse(input: &str) -> Result<Value, FormatError> {
    serde_json::from_str(input).map_err(|e| FormatError::InvalidJson {
        message: e.to_string(),
    })
}
