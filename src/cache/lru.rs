//! Access Order Module
//!
//! Tracks recency of use for LRU eviction.

use std::collections::VecDeque;

use crate::cache::CacheKey;

// == Access Order ==
/// Recency order over cache keys.
///
/// Front = most recently used, back = least recently used. Promotion
/// happens on insert and on every cache hit, so the back of the queue is
/// always the coldest entry.
#[derive(Debug, Default)]
pub struct AccessOrder {
    order: VecDeque<CacheKey>,
}

impl AccessOrder {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Promote ==
    /// Marks a key as most recently used.
    pub fn promote(&mut self, key: &CacheKey) {
        self.forget(key);
        self.order.push_front(key.clone());
    }

    // == Forget ==
    /// Drops a key from the order, if present.
    pub fn forget(&mut self, key: &CacheKey) {
        self.order.retain(|k| k != key);
    }

    // == Pop Coldest ==
    /// Removes and returns the least recently used key.
    pub fn pop_coldest(&mut self) -> Option<CacheKey> {
        self.order.pop_back()
    }

    // == Coldest ==
    /// Returns the least recently used key without removing it.
    #[allow(dead_code)]
    pub fn coldest(&self) -> Option<&CacheKey> {
        self.order.back()
    }

    // == Clear ==
    /// Empties the order.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn key(situation: &str) -> CacheKey {
        CacheKey::derive("test", situation)
    }

    #[test]
    fn test_promote_new_keys_in_order() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("b"));
        order.promote(&key("c"));

        assert_eq!(order.len(), 3);
        assert_eq!(order.coldest(), Some(&key("a")));
    }

    #[test]
    fn test_promote_existing_key_moves_to_front() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("b"));
        order.promote(&key("c"));

        order.promote(&key("a"));

        assert_eq!(order.len(), 3);
        assert_eq!(order.coldest(), Some(&key("b")));
    }

    #[test]
    fn test_pop_coldest_drains_in_recency_order() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("b"));
        order.promote(&key("c"));
        order.promote(&key("b"));

        assert_eq!(order.pop_coldest(), Some(key("a")));
        assert_eq!(order.pop_coldest(), Some(key("c")));
        assert_eq!(order.pop_coldest(), Some(key("b")));
        assert_eq!(order.pop_coldest(), None);
    }

    #[test]
    fn test_forget_leaves_other_keys() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("b"));

        order.forget(&key("a"));
        order.forget(&key("missing"));

        assert_eq!(order.len(), 1);
        assert_eq!(order.coldest(), Some(&key("b")));
    }

    #[test]
    fn test_promote_same_key_repeatedly_keeps_one_slot() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("a"));
        order.promote(&key("a"));

        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_clear_empties_order() {
        let mut order = AccessOrder::new();
        order.promote(&key("a"));
        order.promote(&key("b"));
        order.clear();
        assert!(order.is_empty());
    }
}
