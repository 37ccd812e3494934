//! Cache Key Module
//!
//! Derives deterministic cache keys from (tradition, situation) pairs.

use serde::{Deserialize, Serialize};

// == Cache Key ==
/// Normalized identity of a cached generation result.
///
/// Trivial whitespace/case differences in free-text input must not cause
/// misses that would double-charge the costly generation call, so both
/// components are normalized before the key is formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    // == Derive ==
    /// Derives the key for a (tradition, situation) pair.
    ///
    /// Normalization: trim, lowercase, collapse interior whitespace runs
    /// to a single space. Equivalent inputs map to the same key.
    pub fn derive(tradition: &str, situation: &str) -> Self {
        Self(format!(
            "{}::{}",
            normalize(tradition),
            normalize(situation)
        ))
    }

    /// Returns the normalized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// == Normalization ==
fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
