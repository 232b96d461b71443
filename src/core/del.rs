use crate::core::state::{StateChange, Tracker};
use crate::db::KvStore;
use crate::errors::AppResult;
use crate::models::settings::DEFAULT_TARGET;
use crate::models::{LogEntry, Settings};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove the entry with `id`. An unknown id is not an error: nothing is
    /// removed and `None` is returned.
    pub fn delete_entry<S: KvStore>(
        tracker: &mut Tracker<S>,
        id: &str,
    ) -> AppResult<Option<LogEntry>> {
        let Some(pos) = tracker.state().entries.iter().position(|e| e.id == id) else {
            tracker.persist()?;
            tracing::debug!(id, "delete requested for unknown entry");
            return Ok(None);
        };

        let removed = tracker.state().entries[pos].clone();
        tracker.commit(StateChange::EntryDeleted(id.to_string()), |state| {
            state.entries.retain(|e| e.id != removed.id);
        })?;

        Ok(Some(removed))
    }

    /// Drop every entry and restore the default target and settings.
    pub fn reset<S: KvStore>(tracker: &mut Tracker<S>) -> AppResult<usize> {
        let count = tracker.state().entries.len();
        tracker.commit(StateChange::Reset, |state| {
            state.entries.clear();
            state.target = DEFAULT_TARGET;
            state.settings = Settings::default();
        })?;
        Ok(count)
    }
}
