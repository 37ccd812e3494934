//! Persistence Module
//!
//! Best-effort snapshot persistence for the prayer cache.

mod snapshot;

pub use snapshot::{PersistedEntry, SnapshotStore, SNAPSHOT_VERSION};
