use crate::core::state::AppState;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::LogEntry;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// `lightlog_2025-10-16.csv`
pub fn default_file_name(format: ExportFormat, day: NaiveDate) -> String {
    format!("lightlog_{}.{}", day.format("%Y-%m-%d"), format.as_str())
}

/// Entries of `state` inside the optional `range`, in log order.
pub fn select_entries<'a>(state: &'a AppState, range: Option<&str>) -> AppResult<Vec<&'a LogEntry>> {
    let bounds = match range {
        Some(r) => date::parse_period(r)?,
        None => None,
    };

    Ok(state
        .entries
        .iter()
        .filter(|e| date::within(e.local_date(), bounds))
        .collect())
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export the entry log.
    ///
    /// - `file`: absolute output path; defaults to `lightlog_<today>.<ext>` in
    ///   the current directory
    /// - `range`: `None`, `"all"` or a period such as `2025-06` or
    ///   `2025-06-01:2025-06-10`
    ///
    /// Nothing is written when no entry matches.
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        file: Option<&str>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let entries = select_entries(state, range)?;
        if entries.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = match file {
            Some(f) => {
                let p = expand_tilde(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "Output file path must be absolute: {f}"
                    )));
                }
                p
            }
            None => std::env::current_dir()?.join(default_file_name(format, date::today())),
        };

        ensure_writable(&path, force)?;

        info(format!("Exporting to {}: {}", format.label(), path.display()));

        let out = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Csv => write_csv(out, &entries)?,
            ExportFormat::Json => write_json(out, &entries)?,
        }

        notify_export_success(format.label(), entries.len(), &path);
        Ok(path)
    }
}
