//! Configuration Module
//!
//! Holds the cache capacity setting and its optional environment loading.

use std::env;

use crate::error::{CacheError, Result};

/// Environment variable read by [`CacheConfig::from_env`].
pub const CAPACITY_ENV_VAR: &str = "LFU_CACHE_CAPACITY";

/// Capacity used when none is configured (1 MiB).
pub const DEFAULT_CAPACITY: usize = 1024 * 1024;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of value bytes the cache may hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a config with the given capacity in bytes.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Loads the config from the environment.
    ///
    /// # Environment Variables
    /// - `LFU_CACHE_CAPACITY` - Capacity in bytes (default: 1 MiB)
    ///
    /// A variable that is set but does not hold a non-negative integer is
    /// reported as [`CacheError::InvalidArgument`] rather than silently
    /// replaced by the default.
    pub fn from_env() -> Result<Self> {
        match env::var(CAPACITY_ENV_VAR) {
            Ok(raw) => Ok(Self::new(Self::parse_capacity(&raw)?)),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => Err(CacheError::InvalidArgument(format!(
                "{} is not valid unicode",
                CAPACITY_ENV_VAR
            ))),
        }
    }

    /// Parses a capacity given as a decimal byte count.
    pub fn parse_capacity(raw: &str) -> Result<usize> {
        raw.trim().parse::<usize>().map_err(|_| {
            CacheError::InvalidArgument(format!(
                "capacity must be a non-negative whole number of bytes, got {:?}",
                raw
            ))
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
