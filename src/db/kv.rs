//! Durable key-value storage used by the entry and settings stores.

use crate::db::log::audit_log_lenient;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

/// Minimal string key-value store.
///
/// `set_many` replaces all given keys at once: either every value is written
/// or the previous values stay in place.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set_many(&mut self, pairs: &[(&str, String)]) -> AppResult<()>;

    fn set(&mut self, key: &str, value: String) -> AppResult<()> {
        self.set_many(&[(key, value)])
    }

    /// Append a line to the audit log, if the backend keeps one.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) {}
}

impl KvStore for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set_many(&mut self, pairs: &[(&str, String)]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            )?;
            for (key, value) in pairs {
                stmt.execute(params![key, value, now])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        audit_log_lenient(&self.conn, operation, target, message);
    }
}

/// In-memory store, mostly for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with raw values, e.g. to simulate corrupt data.
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_many(&mut self, pairs: &[(&str, String)]) -> AppResult<()> {
        for (key, value) in pairs {
            self.values.insert((*key).to_string(), value.clone());
        }
        Ok(())
    }
}
