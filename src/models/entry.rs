use super::entry_type::EntryType;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One recorded diet or workout event.
///
/// Persisted as `{id, name, calories, type, timestamp, duration?}` with the
/// timestamp as an RFC 3339 string. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub name: String,
    pub calories: u32,
    #[serde(rename = "type")]
    pub kind: EntryType,
    pub timestamp: DateTime<Local>,
    /// Minutes; only ever set for workouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl LogEntry {
    /// Local calendar date of the entry.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Calories with the balance sign, e.g. `+500` or `-200`.
    pub fn signed_calories(&self) -> String {
        format!("{}{}", self.kind.sign(), self.calories)
    }

    /// Contribution to the daily net (intake minus burn).
    pub fn net_contribution(&self) -> i64 {
        match self.kind {
            EntryType::Diet => i64::from(self.calories),
            EntryType::Workout => -i64::from(self.calories),
        }
    }
}
