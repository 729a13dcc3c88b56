//! Cron expression preview: upcoming runs and a human description.

use crate::error_codes;
use chrono::{DateTime, Utc};
use cron::Schedule;
use std::str::FromStr;
use thiserror::Error;

/// The preset expressions offered by the interactive tools.
pub const TEMPLATES: [(&str, &str); 6] = [
    ("Every Minute", "* * * * *"),
    ("Every Hour", "0 * * * *"),
    ("Every Day", "0 0 * * *"),
    ("Every Week", "0 0 * * 0"),
    ("Every Month", "0 0 1 * *"),
    ("Every Year", "0 0 1 1 *"),
];

const DOW_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CronError {
    #[error("[DEVBELT_CRON_001] invalid cron expression '{expression}': {message}. Suggestion: use five fields (minute hour day-of-month month day-of-week), e.g. '0 0 * * *'.")]
    InvalidExpression { expression: String, message: String },
}

impl CronError {
    pub fn code(&self) -> &'static str {
        match self {
            CronError::InvalidExpression { .. } => error_codes::CRON_INVALID_EXPRESSION,
        }
    }
}

/// A parsed expression with its description and next run times.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CronPreview {
    pub expression: String,
    pub description: String,
    pub upcoming: Vec<DateTime<Utc>>,
}

/// Parse `expression` and collect its next `count` run times from now.
///
/// Five-field expressions get a `0` seconds column prepended; six- and
/// seven-field expressions (seconds first, optional trailing year) pass
/// through as written.
pub fn preview(expression: &str, count: usize) -> Result<CronPreview, CronError> {
    let trimmed = expression.trim();
    let normalized = normalize(trimmed);
    tracing::debug!(expression = %trimmed, normalized = %normalized, "parsing cron expression");
    let schedule =
        Schedule::from_str(&normalized).map_err(|e| CronError::InvalidExpression {
            expression: trimmed.to_string(),
            message: e.to_string(),
        })?;
    Ok(CronPreview {
        expression: trimmed.to_string(),
        description: describe(trimmed),
        upcoming: schedule.upcoming(Utc).take(count).collect(),
    })
}

/// Rewrite an expression into the six/seven-field shape the scheduler
/// parses: five-field input gains a leading `0` seconds column, and
/// numeric day-of-week tokens become names. Unix cron counts Sunday as 0
/// (or 7) while the scheduling crate counts from 1; names mean the same
/// thing in both.
fn normalize(expression: &str) -> String {
    let mut fields: Vec<String> = expression.split_whitespace().map(str::to_string).collect();
    if fields.len() == 5 {
        fields.insert(0, "0".to_string());
    }
    if fields.len() == 6 || fields.len() == 7 {
        fields[5] = rewrite_day_of_week(&fields[5]);
    }
    fields.join(" ")
}

fn rewrite_day_of_week(field: &str) -> String {
    field
        .split(',')
        .map(rewrite_dow_part)
        .collect::<Vec<_>>()
        .join(",")
}

fn rewrite_dow_part(part: &str) -> String {
    let (range, step) = match part.split_once('/') {
        Some((range, step)) => (range, Some(step)),
        None => (part, None),
    };

    // Unix cron lets a range end at 7, which is Sunday again. No ascending
    // name range can say that, so those ranges become explicit day lists.
    if let Some(start) = range_ending_at_seven(range) {
        if let Some(expanded) = expand_day_list(start, step) {
            return expanded;
        }
    }

    let rewritten = if range == "*" {
        range.to_string()
    } else {
        range
            .split('-')
            .map(|token| match token.parse::<usize>() {
                Ok(n) if n <= 7 => DOW_NAMES[n % 7].to_string(),
                _ => token.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-")
    };
    match step {
        Some(step) => format!("{rewritten}/{step}"),
        None => rewritten,
    }
}

/// Start of a numeric `a-7` day-of-week range, if `range` is one.
fn range_ending_at_seven(range: &str) -> Option<usize> {
    let (start, end) = range.split_once('-')?;
    let start = start.parse::<usize>().ok().filter(|n| *n <= 7)?;
    let end = end.parse::<usize>().ok()?;
    (end == 7).then_some(start)
}

/// Enumerate `start-7` into a comma list of day names, honoring an
/// optional step. `5-7` becomes `FRI,SAT,SUN`; `0-7` lists the whole
/// week. An unparseable step returns `None` so the scheduler still sees
/// and rejects it.
fn expand_day_list(start: usize, step: Option<&str>) -> Option<String> {
    let step = match step {
        Some(s) => s.parse::<usize>().ok().filter(|n| *n >= 1)?,
        None => 1,
    };
    let mut days: Vec<&str> = Vec::new();
    for n in (start..=7).step_by(step) {
        let day = DOW_NAMES[n % 7];
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Some(days.join(","))
}

enum FieldShape {
    Every,
    Step(u32),
    Exact(u32),
    Other,
}

fn shape(field: &str) -> FieldShape {
    if field == "*" {
        return FieldShape::Every;
    }
    if let Some(step) = field.strip_prefix("*/") {
        if let Ok(n) = step.parse() {
            return FieldShape::Step(n);
        }
    }
    match field.parse() {
        Ok(n) => FieldShape::Exact(n),
        Err(_) => FieldShape::Other,
    }
}

/// Render a terse English description of the common field shapes.
///
/// Exact values, `*`, and `*/step` render as words; anything else (ranges,
/// lists, names) is echoed verbatim so the description never lies.
pub fn describe(expression: &str) -> String {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    let (minute, hour, dom, month, dow) = match fields.len() {
        5 => (fields[0], fields[1], fields[2], fields[3], fields[4]),
        6 | 7 => (fields[1], fields[2], fields[3], fields[4], fields[5]),
        _ => return expression.to_string(),
    };

    let mut text = match (shape(minute), shape(hour)) {
        (FieldShape::Every, FieldShape::Every) => "every minute".to_string(),
        (FieldShape::Step(n), FieldShape::Every) => format!("every {n} minutes"),
        (FieldShape::Exact(m), FieldShape::Every) => format!("at minute {m} of every hour"),
        (FieldShape::Exact(m), FieldShape::Exact(h)) => format!("at {h:02}:{m:02}"),
        (FieldShape::Exact(m), FieldShape::Step(n)) => {
            format!("at minute {m} past every {n} hours")
        }
        (FieldShape::Every, FieldShape::Exact(h)) => format!("every minute of hour {h}"),
        _ => format!("at minute {minute} of hour {hour}"),
    };

    match shape(dom) {
        FieldShape::Every => {}
        FieldShape::Exact(d) => text.push_str(&format!(" on day-of-month {d}")),
        _ => text.push_str(&format!(" on day-of-month {dom}")),
    }

    match shape(month) {
        FieldShape::Every => {}
        FieldShape::Exact(m) if (1..=12).contains(&m) => {
            text.push_str(&format!(" in {}", MONTHS[(m - 1) as usize]));
        }
        _ => text.push_str(&format!(" in month {month}")),
    }

    match shape(dow) {
        FieldShape::Every => {}
        FieldShape::Exact(d) if d <= 7 => {
            text.push_str(&format!(" on {}", WEEKDAYS[(d % 7) as usize]));
        }
        _ => text.push_str(&format!(" on {dow}")),
    }

    capitalize(&text)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
