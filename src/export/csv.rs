use crate::errors::AppResult;
use crate::export::model::{EntryExport, get_headers};
use crate::models::LogEntry;
use std::io::Write;

/// UTF-8 byte order mark, so spreadsheet apps pick the right encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write entries as CSV (BOM, header, one row per entry) to any writer.
pub fn write_csv<W: Write>(mut out: W, entries: &[&LogEntry]) -> AppResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = ::csv::Writer::from_writer(out);
    wtr.write_record(get_headers())?;

    for e in entries {
        let row = EntryExport::from(*e);
        wtr.write_record([
            row.date,
            row.kind,
            row.name,
            row.calories.to_string(),
            row.duration.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
