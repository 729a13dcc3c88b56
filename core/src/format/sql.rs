use crate::config::FormatConfig;
use sqlformat::{FormatOptions, Indent, QueryParams};

/// Pretty-print a SQL statement block.
///
/// The formatter is lexer-based and never rejects input; text it cannot
/// make sense of passes through with whitespace normalized. Blank input
/// formats to the empty string.
pub fn format_sql(input: &str, config: &FormatConfig) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let options = FormatOptions {
        indent: Indent::Spaces(config.indent_width),
        uppercase: config.uppercase_keywords,
        lines_between_queries: config.lines_between_statements,
    };
    sqlformat::format(input, &QueryParams::None, options)
}

/// Collapse a SQL statement onto one line with single spaces.
pub fn minify_sql(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
