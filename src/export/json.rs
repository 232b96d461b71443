use crate::errors::AppResult;
use crate::models::LogEntry;
use std::io::Write;

/// Write entries as a pretty-printed JSON array, in the persisted shape.
pub fn write_json<W: Write>(mut out: W, entries: &[&LogEntry]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, entries)?;
    out.write_all(b"\n")?;
    Ok(())
}
