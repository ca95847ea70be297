//! Local cache type definitions

use std::time::{Duration, Instant};

/// A cached value together with its write timestamp
///
/// The TTL clock starts at the last write of the key; reads refresh
/// recency, not the expiry clock.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was last written
    pub stored_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Create a new entry stamped with the current time
    pub fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
        }
    }

    /// Check whether the entry has outlived the given TTL
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }

    /// Age of the entry
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}
