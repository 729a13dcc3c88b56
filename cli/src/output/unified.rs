//! Unified diff rendering over the normalized inputs.
//!
//! This view is content-aligned for readability; the positional line
//! comparison still decides the exit code.

use anyhow::Result;
use similar::{ChangeTag, TextDiff};
use std::io::Write;

pub fn write_unified_diff<W: Write>(
    w: &mut W,
    left: &str,
    right: &str,
    left_name: &str,
    right_name: &str,
) -> Result<()> {
    writeln!(w, "--- {}", left_name)?;
    writeln!(w, "+++ {}", right_name)?;

    let diff = TextDiff::from_lines(left, right);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        write!(w, "{}{}", sign, change)?;
        if change.missing_newline() {
            writeln!(w)?;
        }
    }

    Ok(())
}
