//! Frequency Index Module
//!
//! Orders cache keys for Least Frequently Used eviction.

use std::collections::BTreeMap;

// == Frequency Index ==
/// Tracks eviction order for the LFU strategy.
///
/// Keys are stored under their `(frequency, sequence)` rank, so iteration
/// runs from the least frequently used key upward. Keys sharing a frequency
/// come out in ascending write sequence, i.e. oldest insertion first.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    /// Keys ordered by rank
    order: BTreeMap<(u64, u64), String>,
}

impl FrequencyIndex {
    // == Constructor ==
    /// Creates a new empty frequency index.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Insert ==
    /// Records `key` under `rank`.
    pub fn insert(&mut self, rank: (u64, u64), key: String) {
        self.order.insert(rank, key);
    }

    // == Promote ==
    /// Moves the key stored at `from` to `to`.
    ///
    /// Returns false if nothing was stored at `from`.
    pub fn promote(&mut self, from: (u64, u64), to: (u64, u64)) -> bool {
        match self.order.remove(&from) {
            Some(key) => {
                self.order.insert(to, key);
                true
            }
            None => false,
        }
    }

    // == Remove ==
    /// Removes the key stored at `rank`, returning it.
    pub fn remove(&mut self, rank: (u64, u64)) -> Option<String> {
        self.order.remove(&rank)
    }

    // == Evict Lowest ==
    /// Returns and removes the least frequently used key.
    ///
    /// Returns None if the index is empty.
    pub fn evict_lowest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Clear ==
    /// Drops every tracked key.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
