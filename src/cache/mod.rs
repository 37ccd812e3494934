//! Cache Module
//!
//! Bounded, expiring storage of generation results keyed by normalized
//! (tradition, situation) pairs: lazy TTL expiry, LRU eviction, optional
//! best-effort snapshot persistence.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::CacheKey;
pub use lru::AccessOrder;
pub use stats::CacheStats;
pub use store::PrayerCache;

// == Public Constants ==
/// Default maximum number of cached generation results
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Default entry time-to-live in seconds (24 hours)
pub const DEFAULT_TTL_SECONDS: u64 = 86_400;
