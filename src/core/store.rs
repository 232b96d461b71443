//! Entry Store and Settings Store.
//!
//! Both sit on top of a [`KvStore`] and use the persisted encodings:
//! entries as a JSON array, target as a decimal string, reminders as
//! `"true"`/`"false"` and the avatar verbatim. Loading never fails because of
//! bad stored data; it falls back to defaults instead.

use crate::db::KvStore;
use crate::errors::AppResult;
use crate::models::settings::{DEFAULT_AVATAR, DEFAULT_TARGET};
use crate::models::{LogEntry, Settings};

pub const ENTRIES_KEY: &str = "lightlog_entries";
pub const TARGET_KEY: &str = "lightlog_target";
pub const REMINDERS_KEY: &str = "lightlog_reminders";
pub const AVATAR_KEY: &str = "lightlog_avatar";

/// Decode the persisted entries value. Missing or corrupt data gives an
/// empty collection.
pub fn decode_entries(raw: Option<&str>) -> Vec<LogEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<LogEntry>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse stored entries, starting with an empty log");
            Vec::new()
        }
    }
}

pub fn encode_entries(entries: &[LogEntry]) -> AppResult<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Parse a stored target; anything that is not an integer gives the default.
pub fn decode_target(raw: Option<&str>) -> i64 {
    match raw.map(str::trim) {
        Some(s) => s.parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!(value = s, "invalid stored target, using default");
            DEFAULT_TARGET
        }),
        None => DEFAULT_TARGET,
    }
}

pub fn decode_reminders(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true"))
}

pub struct EntryStore;

impl EntryStore {
    /// Read the entry collection (newest first) and the daily target.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> AppResult<(Vec<LogEntry>, i64)> {
        let entries = decode_entries(store.get(ENTRIES_KEY)?.as_deref());
        let target = decode_target(store.get(TARGET_KEY)?.as_deref());
        Ok((entries, target))
    }

    /// Overwrite the persisted entries and target with the given snapshot.
    pub fn save<S: KvStore + ?Sized>(
        store: &mut S,
        entries: &[LogEntry],
        target: i64,
    ) -> AppResult<()> {
        store.set_many(&[
            (ENTRIES_KEY, encode_entries(entries)?),
            (TARGET_KEY, target.to_string()),
        ])
    }
}

pub struct SettingsStore;

impl SettingsStore {
    pub fn load<S: KvStore + ?Sized>(store: &S) -> AppResult<Settings> {
        let avatar = store
            .get(AVATAR_KEY)?
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
        let reminders_enabled = decode_reminders(store.get(REMINDERS_KEY)?.as_deref());

        Ok(Settings {
            avatar,
            reminders_enabled,
        })
    }
}

/// Write entries, target and settings together; either all keys are
/// replaced or none is.
pub fn save_snapshot<S: KvStore + ?Sized>(
    store: &mut S,
    entries: &[LogEntry],
    target: i64,
    settings: &Settings,
) -> AppResult<()> {
    store.set_many(&[
        (ENTRIES_KEY, encode_entries(entries)?),
        (TARGET_KEY, target.to_string()),
        (AVATAR_KEY, settings.avatar.clone()),
        (REMINDERS_KEY, settings.reminders_enabled.to_string()),
    ])
}
