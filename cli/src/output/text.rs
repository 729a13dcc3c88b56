use anyhow::Result;
use devbelt::{DiffResult, LineKind, LineRecord};
use std::io::Write;

pub fn write_text_diff<W: Write>(
    w: &mut W,
    result: &DiffResult,
    left_name: &str,
    right_name: &str,
    quiet: bool,
) -> Result<()> {
    if !result.has_changes() {
        writeln!(w, "No differences found.")?;
        write_summary(w, result, quiet)?;
        return Ok(());
    }

    if !quiet {
        write_rows(w, result, left_name, right_name)?;
        writeln!(w)?;
    }

    write_summary(w, result, quiet)?;

    Ok(())
}

fn write_rows<W: Write>(
    w: &mut W,
    result: &DiffResult,
    left_name: &str,
    right_name: &str,
) -> Result<()> {
    let width = left_column_width(result, left_name);
    writeln!(w, "  {:<width$} |   {}", left_name, right_name)?;

    let rows = result.left.len().max(result.right.len());
    for i in 0..rows {
        let left = result.left.get(i);
        let right = result.right.get(i);
        let line = format!(
            "{} {:<width$} | {} {}",
            gutter(left),
            text_of(left),
            gutter(right),
            text_of(right),
        );
        writeln!(w, "{}", line.trim_end())?;
    }

    Ok(())
}

fn left_column_width(result: &DiffResult, left_name: &str) -> usize {
    result
        .left
        .iter()
        .map(|record| record.text.chars().count())
        .chain(std::iter::once(left_name.chars().count()))
        .max()
        .unwrap_or(0)
}

fn gutter(record: Option<&LineRecord>) -> char {
    match record.map(|r| r.kind) {
        Some(LineKind::Added) => '+',
        Some(LineKind::Removed) => '-',
        _ => ' ',
    }
}

fn text_of(record: Option<&LineRecord>) -> &str {
    record.map(|r| r.text.as_str()).unwrap_or("")
}

fn write_summary<W: Write>(w: &mut W, result: &DiffResult, quiet: bool) -> Result<()> {
    if quiet && !result.has_changes() {
        return Ok(());
    }

    let stats = result.stats();

    writeln!(w, "---")?;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Total changes: {}", stats.added + stats.removed)?;

    if stats.added > 0 {
        writeln!(w, "  Added: {}", stats.added)?;
    }
    if stats.removed > 0 {
        writeln!(w, "  Removed: {}", stats.removed)?;
    }
    writeln!(w, "  Unchanged: {}", stats.unchanged)?;

    Ok(())
}
