//! The sneaker catalog.
//!
//! Owns the in-memory collection and keeps a JSON snapshot of it in a
//! `SnapshotStore`:
//! - `add` assigns the id and, when missing, an `unknown<N>` article
//! - `search` does case-insensitive substring matching plus brand/year filters
//! - every `add` overwrites the snapshot; `restore` replaces the collection
//!
//! Persistence failures never fail an operation. They are logged and kept as
//! diagnostics until the caller drains them.

pub mod query;
pub mod record;
pub mod seed;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, info, warn};

use crate::error::CatalogError;
use crate::storage::SnapshotStore;
pub use query::{SearchFilters, ALL_BRANDS};
pub use record::{NewSneaker, SneakerRecord, Year, DEFAULT_PLACEHOLDER_IMAGE, UNKNOWN};

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_SNAPSHOT_KEY: &str = "sneakerArchive";

const GENERATED_ARTICLE_PREFIX: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Snapshot loaded, collection replaced with this many records.
    Restored(usize),
    /// No snapshot saved yet, collection untouched.
    Missing,
    /// Snapshot unreadable or malformed, collection untouched.
    Failed(String),
}

pub struct Catalog<S> {
    records: Vec<SneakerRecord>,
    store: S,
    snapshot_key: String,
    placeholder_image: String,
    diagnostics: Vec<String>,
}

impl<S: SnapshotStore> Catalog<S> {
    /// Empty catalog backed by `store`.
    pub fn new(store: S) -> Self {
        Catalog {
            records: Vec::new(),
            store,
            snapshot_key: DEFAULT_SNAPSHOT_KEY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            diagnostics: Vec::new(),
        }
    }

    /// Catalog starting from the built-in seed collection.
    pub fn with_seed(store: S) -> Self {
        let mut catalog = Self::new(store);
        catalog.records = seed::seed_records();
        catalog
    }

    pub fn with_snapshot_key(mut self, key: impl Into<String>) -> Self {
        self.snapshot_key = key.into();
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[SneakerRecord] {
        &self.records
    }

    /// Distinct brands, sorted ascending.
    pub fn list_brands(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.brand.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The last `limit` records added, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&SneakerRecord> {
        self.records.iter().rev().take(limit).collect()
    }

    /// Records grouped by collaboration name. Records without one are left out.
    pub fn collaborations(&self) -> BTreeMap<String, Vec<&SneakerRecord>> {
        let mut groups: BTreeMap<String, Vec<&SneakerRecord>> = BTreeMap::new();
        for record in &self.records {
            let name = record.collaboration.trim();
            if name.is_empty() {
                continue;
            }
            groups.entry(name.to_string()).or_default().push(record);
        }
        groups
    }

    /// Free-text search combined with field filters. An empty query matches
    /// everything; the collection itself is never reordered.
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<SneakerRecord> {
        let needle = query.trim().to_lowercase();

        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.search_text().contains(&needle))
            .filter(|r| filters.matches(r))
            .cloned()
            .collect()
    }

    /// Create a record from `new`, append it and save the snapshot.
    ///
    /// Only defaults are applied here; required-field checks belong to
    /// whoever collects the input. Fails only when no id is left, in which
    /// case nothing is added or saved.
    pub fn add(&mut self, new: NewSneaker) -> Result<SneakerRecord, CatalogError> {
        let id = self.next_id()?;

        let article = match non_blank(new.article) {
            Some(article) => article,
            None => self.next_article(),
        };

        let year = match new.year {
            Some(year) if !year.normalized().is_empty() => year,
            _ => Year::unknown(),
        };

        let record = SneakerRecord {
            id,
            article,
            brand: new.brand,
            collaboration: new.collaboration,
            model: new.model,
            model2: new.model2,
            series: new.series,
            collection: new.collection,
            pack: new.pack,
            year,
            country: non_blank(new.country).unwrap_or_else(|| UNKNOWN.to_string()),
            details: new.details.unwrap_or_default(),
            main_color: new.main_color,
            main_color2: new.main_color2,
            detail_color: new.detail_color,
            detail_color2: new.detail_color2,
            description: new.description,
            image: non_blank(new.image).unwrap_or_else(|| self.placeholder_image.clone()),
        };

        self.records.push(record.clone());
        info!(id = record.id, article = %record.article, brand = %record.brand, "record added");

        if let Err(e) = self.persist() {
            warn!(error = %e, "snapshot not saved, changes are kept in memory only");
            self.diagnostics.push(format!("snapshot not saved: {e}"));
        }

        Ok(record)
    }

    /// Overwrite the snapshot with the full collection.
    pub fn persist(&mut self) -> Result<(), CatalogError> {
        let json = serde_json::to_string(&self.records)?;
        self.store.write(&self.snapshot_key, &json)?;
        debug!(records = self.records.len(), bytes = json.len(), "snapshot saved");
        Ok(())
    }

    /// Replace the collection with the saved snapshot, if there is a usable one.
    pub fn restore(&mut self) -> RestoreOutcome {
        match self.load_snapshot() {
            Ok(Some(records)) => {
                let count = records.len();
                self.records = records;
                info!(records = count, "snapshot restored");
                RestoreOutcome::Restored(count)
            }
            Ok(None) => {
                debug!(key = %self.snapshot_key, "no snapshot saved, keeping current collection");
                RestoreOutcome::Missing
            }
            Err(e) => {
                warn!(error = %e, "snapshot not restored, keeping current collection");
                self.diagnostics.push(format!("snapshot not restored: {e}"));
                RestoreOutcome::Failed(e.to_string())
            }
        }
    }

    /// Unix timestamp of the last successful save.
    pub fn last_saved(&self) -> Result<Option<i64>, CatalogError> {
        Ok(self.store.saved_at(&self.snapshot_key)?)
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    fn load_snapshot(&self) -> Result<Option<Vec<SneakerRecord>>, CatalogError> {
        let Some(raw) = self.store.read(&self.snapshot_key)? else {
            return Ok(None);
        };

        let records: Vec<SneakerRecord> = serde_json::from_str(&raw)?;
        check_ids(&records)?;
        Ok(Some(records))
    }

    /// One past the highest id in use. Not a persisted counter: ids can
    /// repeat if the highest record were ever removed.
    fn next_id(&self) -> Result<u64, CatalogError> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(CatalogError::IdsExhausted(max)),
        }
    }

    /// `unknown<N+1>` where N is the highest generated article number in use.
    fn next_article(&self) -> String {
        let highest = self
            .records
            .iter()
            .filter_map(|r| generated_article_number(&r.article))
            .max()
            .unwrap_or(0);

        format!("{GENERATED_ARTICLE_PREFIX}{}", highest.saturating_add(1))
    }
}

fn generated_article_number(article: &str) -> Option<u64> {
    let digits = article.strip_prefix(GENERATED_ARTICLE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_ids(records: &[SneakerRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id == 0 {
            return Err(CatalogError::InvalidSnapshot(format!(
                "record '{}' has id 0",
                record.article
            )));
        }
        if !seen.insert(record.id) {
            return Err(CatalogError::InvalidSnapshot(format!(
                "duplicate id {}",
                record.id
            )));
        }
    }
    Ok(())
}
