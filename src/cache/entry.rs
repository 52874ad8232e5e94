//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use bytes::Bytes;

// == Cache Entry ==
/// Represents a single cache entry with its value and eviction metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value, immutable once inserted
    pub value: Bytes,
    /// Number of successful reads (carried over on overwrite and rename)
    pub frequency: u64,
    /// Write sequence number; orders keys and breaks frequency ties
    pub sequence: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `frequency` - Starting read count (0 for a brand new key)
    /// * `sequence` - Write sequence number assigned by the store
    pub fn new(value: Bytes, frequency: u64, sequence: u64) -> Self {
        Self {
            value,
            frequency,
            sequence,
        }
    }

    // == Size ==
    /// Returns the number of bytes this entry counts against capacity.
    pub fn size(&self) -> usize {
        self.value.len()
    }

    // == Eviction Rank ==
    /// Returns the `(frequency, sequence)` pair used to order eviction.
    pub fn rank(&self) -> (u64, u64) {
        (self.frequency, self.sequence)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(Bytes::from_static(b"value"), 0, 7);

        assert_eq!(entry.value, Bytes::from_static(b"value"));
        assert_eq!(entry.frequency, 0);
        assert_eq!(entry.sequence, 7);
    }

    #[test]
    fn test_entry_size_is_byte_length() {
        let entry = CacheEntry::new(Bytes::from(vec![0u8; 300]), 0, 0);
        assert_eq!(entry.size(), 300);

        let empty = CacheEntry::new(Bytes::new(), 0, 1);
        assert_eq!(empty.size(), 0);
    }

    #[test]
    fn test_entry_rank_orders_frequency_before_sequence() {
        let older_hot = CacheEntry::new(Bytes::new(), 3, 1);
        let newer_cold = CacheEntry::new(Bytes::new(), 1, 9);

        assert!(newer_cold.rank() < older_hot.rank());
    }
}
