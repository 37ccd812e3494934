//! Prayer Cache Module
//!
//! The cache manager: bounded, expiring storage of generation results with
//! lazy TTL expiry at lookup time and LRU eviction at insert time.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{AccessOrder, CacheEntry, CacheKey, CacheStats};
use crate::generate::GenerationResult;
use crate::persist::{PersistedEntry, SnapshotStore};

// == Prayer Cache ==
/// Bounded TTL/LRU cache of generation results.
///
/// Answers "do we already have a fresh result for this key?" and "remember
/// this new result". Capacity and freshness are enforced here; persistence
/// is best-effort and never affects correctness.
#[derive(Debug)]
pub struct PrayerCache {
    /// Keyed storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// Recency order for eviction
    order: AccessOrder,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries retained
    max_entries: usize,
    /// Entry time-to-live in milliseconds
    ttl_ms: u64,
    /// Optional durable snapshot backing
    snapshot: Option<SnapshotStore>,
}

impl PrayerCache {
    // == Constructor ==
    /// Creates a memory-only cache.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of cached results
    /// * `ttl_seconds` - Entry lifetime measured from creation
    pub fn new(max_entries: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: AccessOrder::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms: ttl_seconds * 1000,
            snapshot: None,
        }
    }

    // == Constructor With Snapshot ==
    /// Creates a cache backed by a snapshot file, loading any persisted
    /// entries that are still within TTL. Load failures mean an empty cache.
    pub fn with_snapshot(max_entries: usize, ttl_seconds: u64, snapshot: SnapshotStore) -> Self {
        let mut cache = Self::new(max_entries, ttl_seconds);

        let mut persisted = snapshot.load();
        // Rebuild recency order: promote coldest first so the most recently
        // accessed entry ends up at the front.
        persisted.sort_by_key(|e| e.last_accessed_at);
        for item in persisted {
            let entry = CacheEntry {
                payload: item.payload,
                created_at: item.created_at,
                last_accessed_at: item.last_accessed_at,
            };
            if entry.is_expired(cache.ttl_ms) {
                continue;
            }
            cache.order.promote(&item.key);
            cache.entries.insert(item.key, entry);
        }
        if !cache.entries.is_empty() {
            debug!(entries = cache.entries.len(), "Cache restored from snapshot");
        }

        cache.snapshot = Some(snapshot);
        cache
    }

    // == Lookup ==
    /// Returns the fresh cached result for a (tradition, situation) pair.
    ///
    /// Absent keys are a miss with no side effect. Expired entries are
    /// removed and treated as a miss. A fresh hit bumps the entry's access
    /// time and refreshes its LRU position. Never errors.
    pub fn lookup(&mut self, tradition: &str, situation: &str) -> Option<GenerationResult> {
        let key = CacheKey::derive(tradition, situation);

        let expired = match self.entries.get(&key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) => entry.is_expired(self.ttl_ms),
        };

        if expired {
            debug!(key = key.as_str(), "Removing expired cache entry");
            self.entries.remove(&key);
            self.order.forget(&key);
            self.stats.record_miss();
            self.save_snapshot();
            return None;
        }

        let entry = self.entries.get_mut(&key)?;
        entry.touch();
        let payload = entry.payload.clone();
        self.order.promote(&key);
        self.stats.record_hit();
        Some(payload)
    }

    // == Store ==
    /// Caches a generation result for a (tradition, situation) pair.
    ///
    /// Overwrites any existing entry for the same key, then evicts least
    /// recently used entries until back at capacity.
    pub fn store(&mut self, tradition: &str, situation: &str, payload: GenerationResult) {
        let key = CacheKey::derive(tradition, situation);

        self.entries.insert(key.clone(), CacheEntry::new(payload));
        self.order.promote(&key);

        while self.entries.len() > self.max_entries {
            match self.order.pop_coldest() {
                Some(coldest) => {
                    debug!(key = coldest.as_str(), "Evicting least recently used entry");
                    self.entries.remove(&coldest);
                    self.stats.record_eviction();
                }
                None => break,
            }
        }

        self.save_snapshot();
    }

    // == Clear ==
    /// Empties the cache.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.save_snapshot();
    }

    // == Stats ==
    /// Returns current hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Length ==
    /// Returns the current number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Snapshot Save ==
    /// Persists the current contents, if a snapshot store is configured.
    /// Failures are handled inside the snapshot store.
    fn save_snapshot(&self) {
        if let Some(snapshot) = &self.snapshot {
            let persisted = self
                .entries
                .iter()
                .map(|(key, entry)| PersistedEntry {
                    key: key.clone(),
                    payload: entry.payload.clone(),
                    created_at: entry.created_at,
                    last_accessed_at: entry.last_accessed_at,
                })
                .collect();
            snapshot.save(persisted);
        }
    }
}
