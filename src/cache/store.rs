//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with byte accounting and
//! LFU eviction.

use std::collections::HashMap;
use std::fmt::Display;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, FrequencyIndex};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == LFU Cache ==
/// Byte-bounded cache with Least Frequently Used eviction.
///
/// The sum of stored value lengths never exceeds `max_size`. When a write
/// would overflow, entries with the lowest read count are evicted first;
/// among equal counts the oldest write goes first.
#[derive(Debug)]
pub struct LfuCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Eviction order
    index: FrequencyIndex,
    /// Performance statistics
    stats: CacheStats,
    /// Sum of stored value lengths in bytes
    current_size: usize,
    /// Capacity in bytes, fixed at construction
    max_size: usize,
    /// Next write sequence number
    next_sequence: u64,
}

impl LfuCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` value bytes.
    ///
    /// A capacity of 0 yields a disabled cache that never admits anything.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            index: FrequencyIndex::new(),
            stats: CacheStats::new(),
            current_size: 0,
            max_size: capacity,
            next_sequence: 0,
        }
    }

    /// Creates a cache from a capacity of any integer type.
    ///
    /// Fails with [`CacheError::InvalidArgument`] when the capacity is
    /// negative or does not fit in `usize`.
    pub fn try_with_capacity<T>(capacity: T) -> Result<Self>
    where
        T: TryInto<usize> + Display + Copy,
    {
        let capacity = capacity.try_into().map_err(|_| {
            CacheError::InvalidArgument(format!(
                "capacity must be a non-negative whole number of bytes, got {}",
                capacity
            ))
        })?;
        Ok(Self::new(capacity))
    }

    /// Creates a cache from a loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity)
    }

    // == Get ==
    /// Retrieves a value by key, counting the read toward its frequency.
    ///
    /// Returns None on a miss. The returned `Bytes` shares the stored buffer.
    pub fn get(&mut self, key: &str) -> Option<Bytes> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                let from = entry.rank();
                entry.frequency += 1;
                self.index.promote(from, entry.rank());
                self.stats.record_hit();
                trace!(key, frequency = entry.frequency, "cache hit");
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                trace!(key, "cache miss");
                None
            }
        }
    }

    // == Peek ==
    /// Returns a value without counting the read.
    pub fn peek(&self, key: &str) -> Option<&Bytes> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Frequency ==
    /// Returns the read count of a key without changing it.
    pub fn frequency(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.frequency)
    }

    // == Set ==
    /// Stores a value under `key`, evicting LFU entries as needed.
    ///
    /// A value longer than `max_size` can never fit, so the call is a silent
    /// no-op that leaves any existing entry for `key` untouched. A disabled
    /// cache (capacity 0) rejects every value, empty ones included.
    /// Overwriting a key keeps its read count.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Bytes>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        if self.max_size == 0 || value.len() > self.max_size {
            self.stats.record_rejection();
            debug!(
                key = %key,
                size = value.len(),
                max_size = self.max_size,
                "value exceeds capacity, not cached"
            );
            return self;
        }

        let frequency = self
            .remove_entry(&key)
            .map(|entry| entry.frequency)
            .unwrap_or(0);

        // current_size <= max_size holds here, so the subtraction cannot wrap
        while value.len() > self.max_size - self.current_size {
            if !self.evict_one() {
                break;
            }
        }

        let sequence = self.advance_sequence();
        self.index.insert((frequency, sequence), key.clone());
        self.current_size += value.len();
        self.entries
            .insert(key, CacheEntry::new(value, frequency, sequence));

        self
    }

    // == Rename ==
    /// Moves the entry at `old_key` to `new_key`, keeping value and frequency.
    ///
    /// Returns false without changing anything if `old_key` is absent or
    /// `new_key` is already taken.
    pub fn rename(&mut self, old_key: &str, new_key: impl Into<String>) -> bool {
        let new_key = new_key.into();
        if self.entries.contains_key(&new_key) {
            return false;
        }

        let Some(mut entry) = self.entries.remove(old_key) else {
            return false;
        };
        self.index.remove(entry.rank());

        entry.sequence = self.advance_sequence();
        self.index.insert(entry.rank(), new_key.clone());
        self.entries.insert(new_key.clone(), entry);

        debug!(from = old_key, to = %new_key, "renamed cache entry");
        true
    }

    // == Has ==
    /// Returns true if `key` is present. Does not count as a read.
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    // == Keys ==
    /// Returns all keys in insertion order.
    ///
    /// Overwrites and renames count as fresh insertions.
    pub fn keys(&self) -> Vec<String> {
        let mut ordered: Vec<(u64, &String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.sequence, key))
            .collect();
        ordered.sort_unstable_by_key(|(sequence, _)| *sequence);
        ordered.into_iter().map(|(_, key)| key.clone()).collect()
    }

    // == Clear ==
    /// Removes every entry. Capacity and cumulative counters are kept.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.index.clear();
        self.current_size = 0;
        debug!(dropped, "cache cleared");
    }

    // == Size ==
    /// Returns the number of value bytes currently stored.
    pub fn size(&self) -> usize {
        self.current_size
    }

    // == Max Size ==
    /// Returns the fixed capacity in bytes.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_occupancy(self.entries.len(), self.current_size);
        stats
    }

    // == Internals ==
    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.index.remove(entry.rank());
        self.current_size -= entry.size();
        Some(entry)
    }

    /// Evicts the least frequently used entry. Returns false when empty.
    fn evict_one(&mut self) -> bool {
        let Some(victim) = self.index.evict_lowest() else {
            return false;
        };
        if let Some(entry) = self.entries.remove(&victim) {
            self.current_size -= entry.size();
            self.stats.record_eviction();
            debug!(
                key = %victim,
                frequency = entry.frequency,
                freed = entry.size(),
                "evicted cache entry"
            );
        }
        true
    }

    fn advance_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }
}
