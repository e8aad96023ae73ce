use crate::Result;
use gridview_types::PrefStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite-backed preference store.
///
/// One row per composed key. Writes are last-write-wins; the `PrefStore`
/// impl degrades storage failures to a stderr warning because preference
/// persistence must never fail the UI path.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS prefs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(())
    }

    /// Fallible read, for callers that want to distinguish a missing key
    /// from a broken store
    pub fn try_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM prefs WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Fallible write; upserts the key
    pub fn try_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO prefs (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }
}

impl PrefStore for SqliteStore {
    fn get(&self, key: &str) -> Option<String> {
        self.try_get(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.try_set(key, value) {
            eprintln!("Warning: failed to persist preference '{}': {}", key, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("admin-requests-view-mode"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("admin-requests-view-mode", "cards");
        assert_eq!(
            store.get("admin-requests-view-mode"),
            Some("cards".to_string())
        );
    }

    #[test]
    fn last_write_wins() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set("admin-quotes-density", "comfortable");
        store.set("admin-quotes-density", "compact");
        assert_eq!(store.get("admin-quotes-density"), Some("compact".to_string()));
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("prefs.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            store.set("admin-projects-view-mode", "cards");
        }

        let reopened = SqliteStore::open(&db_path).unwrap();
        assert_eq!(
            reopened.get("admin-projects-view-mode"),
            Some("cards".to_string())
        );
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("data").join("prefs.db");

        let store = SqliteStore::open(&db_path).unwrap();
        store.set("admin-requests-density", "compact");
        assert!(db_path.exists());
    }
}
