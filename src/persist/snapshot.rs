//! Cache Snapshot Store
//!
//! Serializes the cache to a single versioned JSON file. Caching is a
//! best-effort optimization, never a correctness requirement: a missing,
//! malformed, or version-incompatible snapshot loads as "no cache", and
//! write failures are logged and swallowed.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::CacheKey;
use crate::generate::GenerationResult;

// == Snapshot Version ==
/// Bumped whenever the on-disk entry layout changes; a mismatch discards
/// the snapshot rather than attempting migration.
pub const SNAPSHOT_VERSION: u32 = 1;

// == Persisted Entry ==
/// On-disk form of one cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedEntry {
    pub key: CacheKey,
    pub payload: GenerationResult,
    pub created_at: u64,
    pub last_accessed_at: u64,
}

// == Snapshot File Layout ==
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    entries: Vec<PersistedEntry>,
}

// == Snapshot Store ==
/// Reads and writes cache snapshots at a well-known file path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a snapshot store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // == Load ==
    /// Loads persisted entries, returning an empty list on any failure.
    ///
    /// A missing file, unreadable file, malformed JSON, or incompatible
    /// version all degrade to "no cache".
    pub fn load(&self) -> Vec<PersistedEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), "No cache snapshot loaded: {}", e);
                return Vec::new();
            }
        };

        let snapshot: Snapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), "Discarding malformed cache snapshot: {}", e);
                return Vec::new();
            }
        };

        if snapshot.version != SNAPSHOT_VERSION {
            warn!(
                found = snapshot.version,
                expected = SNAPSHOT_VERSION,
                "Discarding cache snapshot with incompatible version"
            );
            return Vec::new();
        }

        snapshot.entries
    }

    // == Save ==
    /// Writes a snapshot of the given entries. Failures are logged, not surfaced.
    pub fn save(&self, entries: Vec<PersistedEntry>) {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            entries,
        };

        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Skipping cache snapshot write, serialization failed: {}", e);
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), "Skipping cache snapshot write: {}", e);
        }
    }
}
