//! Positional line diff between two text blocks.
//!
//! This module defines the types produced by a comparison:
//! - [`LineRecord`]: a single line tagged with its change classification
//! - [`DiffResult`]: the per-side record sequences for side-by-side rendering
//! - [`DiffStats`]: aggregate counts derived from a result

/// Change classification of one line relative to the opposite side at the
/// same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Line matches the opposite side at this index.
    Unchanged,
    /// Line exists on the right and differs from the left at this index.
    Added,
    /// Line exists on the left and differs from the right at this index.
    Removed,
}

/// One line of input paired with its classification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineRecord {
    pub text: String,
    pub kind: LineKind,
}

impl LineRecord {
    pub fn new(text: impl Into<String>, kind: LineKind) -> LineRecord {
        LineRecord {
            text: text.into(),
            kind,
        }
    }
}

/// Per-side record sequences for one comparison.
///
/// Each side holds exactly one record per input line, at the line's own
/// index; the shorter side simply ends earlier. Results are created fresh
/// per invocation and never shared between comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffResult {
    pub left: Vec<LineRecord>,
    pub right: Vec<LineRecord>,
}

impl DiffResult {
    /// True when neither side produced any records.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// True when any record is `Added` or `Removed`.
    pub fn has_changes(&self) -> bool {
        self.left
            .iter()
            .chain(self.right.iter())
            .any(|record| record.kind != LineKind::Unchanged)
    }

    /// Count rows by classification.
    ///
    /// Counts are per row index, not per record: a row whose line changed
    /// contributes to both `added` and `removed`, the way a `-`/`+` pair
    /// does in a conventional diff listing.
    pub fn stats(&self) -> DiffStats {
        let rows = self.left.len().max(self.right.len());
        let mut stats = DiffStats::default();
        for i in 0..rows {
            let removed = matches!(self.left.get(i), Some(r) if r.kind == LineKind::Removed);
            let added = matches!(self.right.get(i), Some(r) if r.kind == LineKind::Added);
            if removed {
                stats.removed += 1;
            }
            if added {
                stats.added += 1;
            }
            if !removed && !added {
                stats.unchanged += 1;
            }
        }
        stats
    }
}

/// Row counts aggregated from a [`DiffResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// Compare two text blocks line by line at matching indexes.
///
/// Lines are compared by exact string equality at the same index, not by
/// minimal-edit alignment: one inserted line makes every following line
/// compare as changed. A line that differs from its counterpart is tagged
/// [`LineKind::Removed`] on the left and [`LineKind::Added`] on the right;
/// an empty line facing a non-empty one keeps its `Unchanged` tag. The
/// shorter side is padded with empty strings for comparison only and never
/// receives records for lines it does not have.
///
/// Splitting: lines break on `\n`, one trailing `\r` per line is trimmed,
/// and empty input has no lines. A trailing `\n` therefore produces a
/// final empty line.
///
/// ```
/// use devbelt::{LineKind, compute_diff};
///
/// let result = compute_diff("a\nb", "a\nc");
/// assert_eq!(result.left[1].kind, LineKind::Removed);
/// assert_eq!(result.right[1].kind, LineKind::Added);
/// ```
pub fn compute_diff(left_text: &str, right_text: &str) -> DiffResult {
    let left_lines = split_lines(left_text);
    let right_lines = split_lines(right_text);
    let rows = left_lines.len().max(right_lines.len());

    let mut result = DiffResult {
        left: Vec::with_capacity(left_lines.len()),
        right: Vec::with_capacity(right_lines.len()),
    };

    for i in 0..rows {
        let left_line = left_lines.get(i).copied().unwrap_or("");
        let right_line = right_lines.get(i).copied().unwrap_or("");
        let changed = left_line != right_line;

        if i < left_lines.len() {
            let kind = if changed && !left_line.is_empty() {
                LineKind::Removed
            } else {
                LineKind::Unchanged
            };
            result.left.push(LineRecord::new(left_line, kind));
        }
        if i < right_lines.len() {
            let kind = if changed && !right_line.is_empty() {
                LineKind::Added
            } else {
                LineKind::Unchanged
            };
            result.right.push(LineRecord::new(right_line, kind));
        }
    }

    result
}

fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(records: &[LineRecord]) -> Vec<LineKind> {
        records.iter().map(|r| r.kind).collect()
    }

    fn texts(records: &[LineRecord]) -> Vec<&str> {
        records.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn empty_inputs_produce_empty_sides() {
        let result = compute_diff("", "");
        assert!(result.left.is_empty());
        assert!(result.right.is_empty());
        assert!(result.is_empty());
        assert!(!result.has_changes());
    }

    #[test]
    fn identical_inputs_are_all_unchanged() {
        let result = compute_diff("a\nb", "a\nb");
        assert_eq!(kinds(&result.left), [LineKind::Unchanged, LineKind::Unchanged]);
        assert_eq!(kinds(&result.right), [LineKind::Unchanged, LineKind::Unchanged]);
        assert!(!result.has_changes());
    }

    #[test]
    fn changed_line_is_removed_left_added_right() {
        let result = compute_diff("a\nb", "a\nc");
        assert_eq!(kinds(&result.left), [LineKind::Unchanged, LineKind::Removed]);
        assert_eq!(kinds(&result.right), [LineKind::Unchanged, LineKind::Added]);
        assert_eq!(result.left[1].text, "b");
        assert_eq!(result.right[1].text, "c");
    }

    #[test]
    fn extra_right_line_is_added_and_left_has_no_record() {
        let result = compute_diff("a", "a\nb");
        assert_eq!(kinds(&result.left), [LineKind::Unchanged]);
        assert_eq!(kinds(&result.right), [LineKind::Unchanged, LineKind::Added]);
        assert_eq!(result.left.len(), 1);
    }

    #[test]
    fn record_counts_match_line_counts() {
        let result = compute_diff("a\nb\nc", "x");
        assert_eq!(result.left.len(), 3);
        assert_eq!(result.right.len(), 1);

        let result = compute_diff("", "x\ny");
        assert_eq!(result.left.len(), 0);
        assert_eq!(result.right.len(), 2);
    }

    #[test]
    fn self_comparison_is_all_unchanged() {
        let block = "{\n  \"a\": 1,\n\n  \"b\": 2\n}";
        let result = compute_diff(block, block);
        assert!(result.left.iter().all(|r| r.kind == LineKind::Unchanged));
        assert!(result.right.iter().all(|r| r.kind == LineKind::Unchanged));
        assert_eq!(texts(&result.left), texts(&result.right));
    }

    #[test]
    fn swapping_inputs_mirrors_added_and_removed() {
        let (x, y) = ("a\nb\nc", "a\nq");
        let forward = compute_diff(x, y);
        let backward = compute_diff(y, x);

        assert_eq!(texts(&forward.left), texts(&backward.right));
        assert_eq!(texts(&forward.right), texts(&backward.left));

        let mirrored: Vec<LineKind> = backward
            .right
            .iter()
            .map(|r| match r.kind {
                LineKind::Added => LineKind::Removed,
                LineKind::Removed => LineKind::Added,
                LineKind::Unchanged => LineKind::Unchanged,
            })
            .collect();
        assert_eq!(kinds(&forward.left), mirrored);
    }

    #[test]
    fn positional_policy_marks_shifted_lines_changed() {
        // One inserted line at the top shifts everything below it.
        let result = compute_diff("a\nb\nc", "x\na\nb\nc");
        assert!(result.left.iter().all(|r| r.kind == LineKind::Removed));
        assert!(result.right.iter().all(|r| r.kind == LineKind::Added));
        assert_eq!(result.stats(), DiffStats { added: 4, removed: 3, unchanged: 0 });
    }

    #[test]
    fn empty_line_facing_content_stays_unchanged() {
        let result = compute_diff("a\n\nc", "a\nb\nc");
        assert_eq!(
            kinds(&result.left),
            [LineKind::Unchanged, LineKind::Unchanged, LineKind::Unchanged]
        );
        assert_eq!(
            kinds(&result.right),
            [LineKind::Unchanged, LineKind::Added, LineKind::Unchanged]
        );
    }

    #[test]
    fn trailing_newline_only_difference_is_not_a_change() {
        // The final empty line compares equal to the padding on the other side.
        let result = compute_diff("a\n", "a");
        assert_eq!(result.left.len(), 2);
        assert_eq!(result.right.len(), 1);
        assert!(!result.has_changes());
    }

    #[test]
    fn crlf_input_compares_equal_to_lf() {
        let result = compute_diff("a\r\nb", "a\nb");
        assert!(!result.has_changes());
        assert_eq!(texts(&result.left), ["a", "b"]);
    }

    #[test]
    fn stats_count_rows_by_classification() {
        let result = compute_diff("a\nb", "a\nc\nd");
        assert_eq!(result.stats(), DiffStats { added: 2, removed: 1, unchanged: 1 });
        assert!(result.has_changes());
    }

    #[test]
    fn serde_shape_uses_snake_case_kinds() {
        let result = compute_diff("a", "b");
        let value = serde_json::to_value(&result).expect("serialize result");
        assert_eq!(
            value,
            serde_json::json!({
                "left": [{ "text": "a", "kind": "removed" }],
                "right": [{ "text": "b", "kind": "added" }],
            })
        );

        let roundtrip: DiffResult = serde_json::from_value(value).expect("deserialize result");
        assert_eq!(roundtrip, result);
    }
}
