// src/export/model.rs

use crate::models::LogEntry;

/// Flat export row for one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub date: String,
    pub kind: String,
    pub name: String,
    pub calories: u32,
    pub duration: u32,
}

impl From<&LogEntry> for EntryExport {
    fn from(e: &LogEntry) -> Self {
        Self {
            date: e.get_date_time(),
            kind: e.kind.label().to_string(),
            name: e.name.clone(),
            calories: e.calories,
            duration: e.duration.unwrap_or(0),
        }
    }
}

/// Header for the CSV export.
pub(crate) fn get_headers() -> [&'static str; 5] {
    ["Date", "Type", "Name", "Calories(kcal)", "Duration(min)"]
}
