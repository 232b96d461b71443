//! Application state and the controller that owns it.
//!
//! [`Tracker`] is the single owner of the entry log, the target and the
//! settings. Views only ever get `&AppState`; every mutation goes through the
//! lifecycle and settings operations, which call [`Tracker::commit`] to
//! persist the full snapshot and notify observers.

use crate::core::store::{EntryStore, SettingsStore, save_snapshot};
use crate::db::KvStore;
use crate::errors::AppResult;
use crate::models::{LogEntry, Settings};
use crate::models::settings::DEFAULT_TARGET;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Newest first.
    pub entries: Vec<LogEntry>,
    pub target: i64,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            target: DEFAULT_TARGET,
            settings: Settings::default(),
        }
    }
}

impl AppState {
    pub fn find(&self, id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// What a committed mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    EntryAdded(String),
    EntryDeleted(String),
    TargetChanged(i64),
    AvatarChanged,
    RemindersChanged(bool),
    Reset,
}

impl StateChange {
    /// Operation name used in the audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            StateChange::EntryAdded(_) => "add",
            StateChange::EntryDeleted(_) => "del",
            StateChange::TargetChanged(_)
            | StateChange::AvatarChanged
            | StateChange::RemindersChanged(_) => "settings",
            StateChange::Reset => "reset",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            StateChange::EntryAdded(id) => format!("Entry {id} added"),
            StateChange::EntryDeleted(id) => format!("Entry {id} deleted"),
            StateChange::TargetChanged(t) => format!("Daily target set to {t} kcal"),
            StateChange::AvatarChanged => "Avatar updated".to_string(),
            StateChange::RemindersChanged(on) => {
                format!("Reminders {}", if *on { "enabled" } else { "disabled" })
            }
            StateChange::Reset => "All data reset".to_string(),
        }
    }
}

/// Receives the latest snapshot after every committed mutation.
pub trait StateObserver {
    fn state_changed(&self, state: &AppState, change: &StateChange);
}

pub struct Tracker<S: KvStore> {
    store: S,
    state: AppState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl<S: KvStore> Tracker<S> {
    /// Load the persisted state from `store`.
    pub fn open(store: S) -> AppResult<Self> {
        let (entries, target) = EntryStore::load(&store)?;
        let settings = SettingsStore::load(&store)?;

        tracing::debug!(entries = entries.len(), target, "state loaded");

        Ok(Self {
            store,
            state: AppState {
                entries,
                target,
                settings,
            },
            observers: Vec::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Apply `mutate` to the state, persist the whole snapshot and notify
    /// observers. If saving fails the in-memory state is rolled back.
    pub(crate) fn commit<F>(&mut self, change: StateChange, mutate: F) -> AppResult<()>
    where
        F: FnOnce(&mut AppState),
    {
        let previous = self.state.clone();
        mutate(&mut self.state);

        if let Err(e) = self.persist() {
            self.state = previous;
            return Err(e);
        }

        self.store
            .audit(change.operation(), &audit_target(&change), &change.describe());

        for observer in &self.observers {
            observer.state_changed(&self.state, &change);
        }
        Ok(())
    }

    /// Persist the snapshot without notifying anyone.
    pub(crate) fn persist(&mut self) -> AppResult<()> {
        save_snapshot(
            &mut self.store,
            &self.state.entries,
            self.state.target,
            &self.state.settings,
        )
    }
}

fn audit_target(change: &StateChange) -> String {
    match change {
        StateChange::EntryAdded(id) | StateChange::EntryDeleted(id) => id.clone(),
        StateChange::TargetChanged(_) => "target".to_string(),
        StateChange::AvatarChanged => "avatar".to_string(),
        StateChange::RemindersChanged(_) => "reminders".to_string(),
        StateChange::Reset => String::new(),
    }
}
