//! Pattern testing against sample text.

use crate::error_codes;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PatternError {
    #[error("[DEVBELT_RE_001] invalid pattern: {source}. Suggestion: check the pattern syntax and escaping.")]
    InvalidPattern {
        #[from]
        source: regex::Error,
    },
}

impl PatternError {
    pub fn code(&self) -> &'static str {
        match self {
            PatternError::InvalidPattern { .. } => error_codes::REGEX_INVALID_PATTERN,
        }
    }
}

/// One pattern match inside the haystack, with byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// All non-overlapping matches of `pattern` in `haystack`, in order.
pub fn find_matches(pattern: &str, haystack: &str) -> Result<Vec<MatchSpan>, PatternError> {
    let re = Regex::new(pattern)?;
    Ok(re
        .find_iter(haystack)
        .map(|m| MatchSpan {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
        })
        .collect())
}

/// Wrap every match of `pattern` in the `prefix`/`suffix` marker pair.
///
/// Markers are inserted literally; `$` sequences in them are not expanded.
pub fn highlight(
    pattern: &str,
    haystack: &str,
    prefix: &str,
    suffix: &str,
) -> Result<String, PatternError> {
    let re = Regex::new(pattern)?;
    Ok(re
        .replace_all(haystack, |caps: &regex::Captures| {
            format!("{}{}{}", prefix, &caps[0], suffix)
        })
        .into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_listed_in_order_with_offsets() {
        let spans = find_matches(r"\d+", "a1b22c").expect("valid pattern");
        assert_eq!(
            spans,
            [
                MatchSpan { text: "1".to_string(), start: 1, end: 2 },
                MatchSpan { text: "22".to_string(), start: 3, end: 5 },
            ]
        );
    }

    #[test]
    fn no_match_yields_an_empty_list() {
        let spans = find_matches(r"\d", "abc").expect("valid pattern");
        assert!(spans.is_empty());
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = find_matches("(", "abc").expect_err("unbalanced paren should fail");
        assert_eq!(err.code(), crate::error_codes::REGEX_INVALID_PATTERN);
    }

    #[test]
    fn highlight_wraps_each_match() {
        let highlighted =
            highlight(r"\d+", "a1b22", "<mark>", "</mark>").expect("valid pattern");
        assert_eq!(highlighted, "a<mark>1</mark>b<mark>22</mark>");
    }

    #[test]
    fn dollar_signs_in_markers_stay_literal() {
        let highlighted = highlight("b", "abc", "$1", "$0").expect("valid pattern");
        assert_eq!(highlighted, "a$1b$0c");
    }

    #[test]
    fn empty_pattern_matches_between_characters() {
        let spans = find_matches("", "ab").expect("empty pattern is valid");
        assert_eq!(spans.len(), 3);
        assert!(spans.iter().all(|s| s.text.is_empty()));
    }
}
