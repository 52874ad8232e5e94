//! Shared Cache Handle
//!
//! Thread-safe wrapper that guards one `LfuCache` with a single lock.

use std::sync::Arc;

use bytes::Bytes;
use parking_lot::Mutex;

use crate::cache::{CacheStats, LfuCache};
use crate::config::CacheConfig;

// == Shared LFU Cache ==
/// Cloneable handle to an `LfuCache` shared across threads.
///
/// Every operation holds one exclusive lock for its whole duration, so
/// other callers never observe a partial eviction or an overshooting size.
/// Reads take the same lock because they update frequency counters.
#[derive(Debug, Clone)]
pub struct SharedLfuCache {
    inner: Arc<Mutex<LfuCache>>,
}

impl SharedLfuCache {
    /// Creates a shared cache holding at most `capacity` value bytes.
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(LfuCache::new(capacity))
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::from_cache(LfuCache::from_config(config))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: LfuCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().get(key)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.inner.lock().set(key, value);
    }

    pub fn rename(&self, old_key: &str, new_key: impl Into<String>) -> bool {
        self.inner.lock().rename(old_key, new_key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.inner.lock().has(key)
    }

    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().delete(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn frequency(&self, key: &str) -> Option<u64> {
        self.inner.lock().frequency(key)
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn max_size(&self) -> usize {
        self.inner.lock().max_size()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}
