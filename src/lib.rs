//! LFU Cache - A byte-bounded in-memory cache
//!
//! Stores binary values under string keys and evicts the least frequently
//! used entries whenever a write would exceed the configured capacity.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, LfuCache, SharedLfuCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
