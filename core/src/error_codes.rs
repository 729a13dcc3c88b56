//! Stable error codes embedded in user-facing messages.
//!
//! Each library error renders as `[CODE] message. Suggestion: ...` and
//! exposes the code through a `code()` accessor. The codes are part of the
//! CLI contract (scripts grep for them), so existing codes never change
//! meaning or disappear.

pub const CONFIG_ZERO_INDENT: &str = "DEVBELT_CFG_001";
pub const CONFIG_INDENT_TOO_WIDE: &str = "DEVBELT_CFG_002";

pub const FMT_INVALID_JSON: &str = "DEVBELT_FMT_001";

pub const TIME_OUT_OF_RANGE: &str = "DEVBELT_TIME_001";
pub const TIME_UNPARSEABLE: &str = "DEVBELT_TIME_002";
pub const TIME_UNKNOWN_ZONE: &str = "DEVBELT_TIME_003";

pub const CRON_INVALID_EXPRESSION: &str = "DEVBELT_CRON_001";

pub const REGEX_INVALID_PATTERN: &str = "DEVBELT_RE_001";

pub const SCHEMA_INVALID_INSTANCE: &str = "DEVBELT_SCHEMA_001";
pub const SCHEMA_INVALID_SCHEMA: &str = "DEVBELT_SCHEMA_002";

pub const JWT_MALFORMED_TOKEN: &str = "DEVBELT_JWT_001";
pub const JWT_SEGMENT_ENCODING: &str = "DEVBELT_JWT_002";
pub const JWT_SEGMENT_JSON: &str = "DEVBELT_JWT_003";
