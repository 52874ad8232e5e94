//! Cache Module
//!
//! Provides a byte-bounded in-memory cache with exact LFU eviction.

mod entry;
mod frequency;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use frequency::FrequencyIndex;
pub use shared::SharedLfuCache;
pub use stats::CacheStats;
pub use store::LfuCache;
