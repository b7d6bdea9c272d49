use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::dataset::loader::{load_listings, ListingTable};
use crate::dataset::DatasetError;

/// Process-wide handle to the listings table.
///
/// The table loads lazily on first use and is shared read-only as an
/// `Arc`. `reload` swaps in a fresh table; requests already holding the
/// old `Arc` finish against it untouched.
pub struct Dataset {
    path: PathBuf,
    slot: RwLock<Option<Arc<ListingTable>>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetStatus {
    pub loaded: bool,
    pub source: String,
    pub listings: usize,
    pub skipped_rows: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Dataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(None),
        }
    }

    /// Current table, loading it on first call. A failed load is not
    /// remembered, so the next call tries again.
    pub fn table(&self) -> Result<Arc<ListingTable>, DatasetError> {
        if let Some(table) = self.current() {
            return Ok(table);
        }

        // Parse without holding the lock; the write guard only installs.
        let loaded = Arc::new(load_listings(&self.path)?);

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another worker may have installed a table while we were loading.
        let table = slot.get_or_insert_with(|| Arc::clone(&loaded));
        Ok(Arc::clone(table))
    }

    /// Re-read the file and replace the table. On failure the previous
    /// table stays in place.
    pub fn reload(&self) -> Result<Arc<ListingTable>, DatasetError> {
        let table = Arc::new(load_listings(&self.path)?);

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }

    pub fn status(&self) -> DatasetStatus {
        match self.current() {
            Some(table) => DatasetStatus {
                loaded: true,
                source: table.source.clone(),
                listings: table.len(),
                skipped_rows: table.skipped_rows,
                loaded_at: Some(table.loaded_at),
            },
            None => DatasetStatus {
                loaded: false,
                source: self.path.display().to_string(),
                listings: 0,
                skipped_rows: 0,
                loaded_at: None,
            },
        }
    }

    fn current(&self) -> Option<Arc<ListingTable>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }
}
