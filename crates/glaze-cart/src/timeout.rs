//! Timeout configuration for cart operations.

use std::time::Duration;

/// Bounds on how long a cart operation may wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// A single store call.
    pub store: Duration,
    /// Waiting for another mutation of the same cart to finish.
    pub lock: Duration,
}

impl TimeoutConfig {
    /// Create a new timeout configuration.
    pub fn new(store: Duration, lock: Duration) -> Self {
        Self { store, lock }
    }

    /// Create from a single store timeout.
    ///
    /// A lock wait covers one full mutation by the holder, at most
    /// four store calls.
    pub fn from_store(store: Duration) -> Self {
        Self {
            store,
            lock: store * 4,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self::from_store(Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TimeoutConfig::default();
        assert_eq!(config.store, Duration::from_secs(5));
        assert_eq!(config.lock, Duration::from_secs(20));
    }
}
