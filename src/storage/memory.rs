use std::collections::HashMap;

use super::{check_quota, unix_now, SnapshotStore};
use crate::error::StorageError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, (String, i64)>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(limit: usize) -> Self {
        MemoryStore {
            values: HashMap::new(),
            quota: Some(limit),
        }
    }

    /// Store a raw value bypassing the quota, for simulating hand-edited or
    /// corrupted snapshots.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), (value.to_string(), unix_now()));
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).map(|(value, _)| value.clone()))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(self.quota, value)?;
        self.values.insert(key.to_string(), (value.to_string(), unix_now()));
        Ok(())
    }

    fn saved_at(&self, key: &str) -> Result<Option<i64>, StorageError> {
        Ok(self.values.get(key).map(|(_, at)| *at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_overwrites() {
        let mut store = MemoryStore::new();
        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));
        assert!(store.saved_at("k").unwrap().is_some());
    }

    #[test]
    fn quota_rejects_without_clobbering() {
        let mut store = MemoryStore::with_quota(4);
        store.write("k", "abc").unwrap();
        let err = store.write("k", "abcdef").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 6, limit: 4 }));
        assert_eq!(store.read("k").unwrap().as_deref(), Some("abc"));
    }

    #[test]
    fn missing_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.read("nope").unwrap().is_none());
        assert!(store.saved_at("nope").unwrap().is_none());
    }
}
