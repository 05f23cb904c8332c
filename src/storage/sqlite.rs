use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::{check_quota, unix_now, SnapshotStore};
use crate::error::StorageError;

/// Get the default database path (~/.local/share/kicks/kicks.db or platform equivalent)
pub fn default_db_path() -> Result<PathBuf, StorageError> {
    let data_dir = directories::ProjectDirs::from("", "", "kicks")
        .ok_or(StorageError::NoDataDir)?
        .data_dir()
        .to_path_buf();

    Ok(data_dir.join("kicks.db"))
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS snapshots (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            saved_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}

/// Database handle. Open once per command, reuse across all operations.
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
    quota: Option<usize>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        tracing::debug!(path = %path.display(), "opened snapshot database");

        Ok(SqliteStore {
            conn,
            path: Some(path.to_path_buf()),
            quota: None,
        })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(SqliteStore {
            conn,
            path: None,
            quota: None,
        })
    }

    /// Reject writes whose value is larger than `limit` bytes.
    pub fn with_quota(mut self, limit: Option<usize>) -> Self {
        self.quota = limit;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl SnapshotStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(self.quota, value)?;

        self.conn.execute(
            "INSERT INTO snapshots (key, value, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, saved_at = excluded.saved_at",
            params![key, value, unix_now()],
        )?;

        Ok(())
    }

    fn saved_at(&self, key: &str) -> Result<Option<i64>, StorageError> {
        let saved_at = self
            .conn
            .query_row(
                "SELECT saved_at FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(saved_at)
    }
}
