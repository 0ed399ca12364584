//! Durable key-value slots

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{params, types::ValueRef, Connection};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Value under `{0}` is not UTF-8 text")]
    NotText(String),
}

/// A named key-value slot that survives restarts.
pub trait DurableSlot: Send {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>, SlotError>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), SlotError>;

    /// Delete `key` (no-op when absent)
    fn remove(&self, key: &str) -> Result<(), SlotError>;

    /// Copy the value under `key` to `backup_key` as stored.
    ///
    /// Returns false when `key` is absent.
    fn backup(&self, key: &str, backup_key: &str) -> Result<bool, SlotError> {
        match self.read(key)? {
            Some(value) => {
                self.write(backup_key, &value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Slot store backed by the `app_state` table
#[derive(Clone)]
pub struct SqliteSlot {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSlot {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Clear all slots
    pub fn clear_all(&self) -> Result<(), SlotError> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM app_state", [])?;
        Ok(())
    }
}

impl DurableSlot for SqliteSlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare("SELECT value FROM app_state WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };
        let bytes = match row.get_ref(0)? {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes.to_vec(),
            ValueRef::Integer(n) => return Ok(Some(n.to_string())),
            ValueRef::Real(f) => return Ok(Some(f.to_string())),
            ValueRef::Null => return Err(SlotError::NotText(key.to_string())),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| SlotError::NotText(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(())
    }

    // Copies inside SQLite so values that do not decode as text keep their bytes.
    fn backup(&self, key: &str, backup_key: &str) -> Result<bool, SlotError> {
        let conn = self.conn.lock();
        let copied = conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             SELECT ?2, value, ?3 FROM app_state WHERE key = ?1
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, backup_key, Utc::now().to_rfc3339()],
        )?;
        Ok(copied > 0)
    }
}

/// Process-local slot store; clones share the same map.
#[derive(Clone, Default)]
pub struct MemorySlot {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.lock().contains_key(key)
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, SlotError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SlotError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.values.lock().remove(key);
        Ok(())
    }
}
