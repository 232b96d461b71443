use crate::core::state::{StateChange, Tracker};
use crate::db::KvStore;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryType, LogEntry};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Creation of new log entries.
pub struct AddLogic;

impl AddLogic {
    /// Build a new entry without touching any state.
    ///
    /// - blank names become the type's placeholder
    /// - calories are stored as an absolute value
    /// - duration is kept for workouts only
    pub fn build_entry(
        name: &str,
        calories: i64,
        kind: EntryType,
        duration: Option<u32>,
        now: DateTime<Local>,
    ) -> AppResult<LogEntry> {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            kind.placeholder_name().to_string()
        } else {
            trimmed.to_string()
        };

        let calories = u32::try_from(calories.unsigned_abs())
            .map_err(|_| AppError::InvalidCalories(calories.to_string()))?;

        let duration = match kind {
            EntryType::Workout => duration,
            EntryType::Diet => None,
        };

        Ok(LogEntry {
            id: Uuid::new_v4().to_string(),
            name,
            calories,
            kind,
            timestamp: now,
            duration,
        })
    }

    /// Create an entry timestamped now, put it at the front of the log and
    /// persist.
    pub fn add_entry<S: KvStore>(
        tracker: &mut Tracker<S>,
        name: &str,
        calories: i64,
        kind: EntryType,
        duration: Option<u32>,
    ) -> AppResult<LogEntry> {
        Self::add_entry_at(tracker, name, calories, kind, duration, Local::now())
    }

    /// Same as [`AddLogic::add_entry`] with an explicit creation time.
    pub fn add_entry_at<S: KvStore>(
        tracker: &mut Tracker<S>,
        name: &str,
        calories: i64,
        kind: EntryType,
        duration: Option<u32>,
        now: DateTime<Local>,
    ) -> AppResult<LogEntry> {
        let entry = Self::build_entry(name, calories, kind, duration, now)?;

        let stored = entry.clone();
        tracker.commit(StateChange::EntryAdded(entry.id.clone()), move |state| {
            state.entries.insert(0, stored);
        })?;

        tracing::debug!(id = %entry.id, kind = entry.kind.et_as_str(), "entry added");
        Ok(entry)
    }
}
