//! In-memory list cache keyed by integer id.
//!
//! Entries live for the whole process: there is no TTL, no size bound and no
//! eviction. The first value stored under a key stays until `clear()`.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;
use vinyls_core::{ArtistAlbum, CollectorAlbum, Comment};

/// Unbounded, first-write-wins map from id to a list of values.
#[derive(Debug)]
pub struct ListCache<V> {
    entries: RwLock<HashMap<i64, Vec<V>>>,
}

impl<V: Clone> ListCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Store `values` under `key` unless the key is already cached.
    ///
    /// Returns `true` if the values were inserted. A later put for the same
    /// key is ignored and the original list keeps being served.
    pub fn put(&self, key: i64, values: Vec<V>) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(&key) {
            debug!(key, "Cache entry already present, keeping original");
            return false;
        }
        entries.insert(key, values);
        true
    }

    /// Cached list for `key`, or an empty list if nothing is cached.
    pub fn get(&self, key: i64) -> Vec<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone> Default for ListCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every cached resource kind, shared by the repositories.
#[derive(Debug, Default)]
pub struct CatalogCache {
    /// Comments keyed by album id
    pub album_comments: ListCache<Comment>,
    /// Collection entries keyed by collector id
    pub collector_albums: ListCache<CollectorAlbum>,
    /// Album summaries keyed by artist id
    pub artist_albums: ListCache<ArtistAlbum>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_all(&self) {
        self.album_comments.clear();
        self.collector_albums.clear();
        self.artist_albums.clear();
    }
}
