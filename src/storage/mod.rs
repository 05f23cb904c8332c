//! Key-value snapshot storage.
//!
//! The catalog persists one JSON document under a fixed key. Backends:
//! - `SqliteStore`: a single-table SQLite file under the platform data dir
//! - `MemoryStore`: in-process map, used by tests and benches
//!
//! Both support an optional quota so a write that would exceed it fails
//! without touching the previously stored value.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;

pub trait SnapshotStore {
    /// Value stored under `key`, or `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Unix timestamp of the last write to `key`.
    fn saved_at(&self, key: &str) -> Result<Option<i64>, StorageError>;
}

pub(crate) fn check_quota(quota: Option<usize>, value: &str) -> Result<(), StorageError> {
    match quota {
        Some(limit) if value.len() > limit => Err(StorageError::QuotaExceeded {
            needed: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
