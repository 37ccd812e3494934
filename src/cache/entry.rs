//! Cache Entry Module
//!
//! Defines the structure of individual cached generation results.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::generate::GenerationResult;

// == Cache Entry ==
/// A cached generation result with freshness metadata.
///
/// The TTL is store-wide rather than per-entry; an entry only records when
/// it was created and when it was last served.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached generation result
    pub payload: GenerationResult,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Last successful lookup timestamp (Unix milliseconds)
    pub last_accessed_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry with `created_at = last_accessed_at = now`.
    pub fn new(payload: GenerationResult) -> Self {
        let now = current_timestamp_ms();
        Self {
            payload,
            created_at: now,
            last_accessed_at: now,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Expiry is measured from creation time, never from access time: a
    /// frequently served entry still dies at `created_at + ttl`. The
    /// boundary is inclusive.
    pub fn is_expired(&self, ttl_ms: u64) -> bool {
        current_timestamp_ms().saturating_sub(self.created_at) >= ttl_ms
    }

    // == Touch ==
    /// Records a successful lookup.
    pub fn touch(&mut self) {
        self.last_accessed_at = current_timestamp_ms();
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
