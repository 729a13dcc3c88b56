//! Epoch and calendar conversions.

use crate::error_codes;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Display shape used by the converter outputs (`2024/05/01 13:30:00`).
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TimestampError {
    #[error("[DEVBELT_TIME_001] epoch seconds {seconds} are outside the representable range. Suggestion: pass seconds, not milliseconds.")]
    OutOfRange { seconds: i64 },
    #[error("[DEVBELT_TIME_002] could not parse '{input}' as a datetime. Suggestion: use RFC 3339 or YYYY/MM/DD HH:MM:SS.")]
    Unparseable { input: String },
    #[error("[DEVBELT_TIME_003] unknown timezone '{name}'. Suggestion: use an IANA name such as Europe/London or Asia/Tokyo.")]
    UnknownTimezone { name: String },
}

impl TimestampError {
    pub fn code(&self) -> &'static str {
        match self {
            TimestampError::OutOfRange { .. } => error_codes::TIME_OUT_OF_RANGE,
            TimestampError::Unparseable { .. } => error_codes::TIME_UNPARSEABLE,
            TimestampError::UnknownTimezone { .. } => error_codes::TIME_UNKNOWN_ZONE,
        }
    }
}

/// Convert epoch seconds to a UTC datetime.
pub fn from_unix(seconds: i64) -> Result<DateTime<Utc>, TimestampError> {
    DateTime::from_timestamp(seconds, 0).ok_or(TimestampError::OutOfRange { seconds })
}

/// Parse RFC 3339 or the converter's `YYYY/MM/DD HH:MM:SS` shape.
///
/// The slash shape carries no offset and is read as UTC.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = input.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(trimmed, DISPLAY_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError::Unparseable {
            input: trimmed.to_string(),
        })
}

/// Parse a datetime (RFC 3339 or `YYYY/MM/DD HH:MM:SS`) into epoch seconds.
pub fn to_unix(input: &str) -> Result<i64, TimestampError> {
    parse_datetime(input).map(|dt| dt.timestamp())
}

/// Render epoch seconds in the named IANA timezone.
pub fn in_timezone(seconds: i64, zone: &str) -> Result<DateTime<Tz>, TimestampError> {
    let tz: Tz = zone.parse().map_err(|_| TimestampError::UnknownTimezone {
        name: zone.to_string(),
    })?;
    Ok(from_unix(seconds)?.with_timezone(&tz))
}

/// Current epoch seconds.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}
