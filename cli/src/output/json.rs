use anyhow::Result;
use devbelt::DiffResult;
use std::io::Write;

pub fn write_json_diff<W: Write>(w: &mut W, result: &DiffResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, result)?;
    writeln!(w)?;
    Ok(())
}
