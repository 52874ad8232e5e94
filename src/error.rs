//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Ordinary outcomes (misses, failed deletes, rename collisions, oversized
/// values) are reported through return values, never through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Caller supplied an argument the cache cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CacheError::InvalidArgument("capacity must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: capacity must be non-negative"
        );
    }
}
