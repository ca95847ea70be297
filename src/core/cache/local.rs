//! Bounded TTL+LRU cache implementation

use super::types::CacheEntry;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

/// In-process bounded cache combining LRU eviction and lazy TTL expiry
///
/// A single `LruCache` holds both the key map and the recency order, so the
/// two can never disagree, and inserting at capacity evicts exactly the one
/// least-recently-used entry.
///
/// Reads dominate, so `get` takes the shared lock for the fast path and
/// re-acquires the exclusive lock only to mutate (expiry removal or
/// recency promotion), re-checking state after the lock upgrade because a
/// concurrent caller may have gotten there first.
pub struct LocalCache<V> {
    inner: RwLock<LruCache<String, CacheEntry<V>>>,
    ttl: Duration,
}

impl<V: Clone> LocalCache<V> {
    /// Create a cache holding at most `capacity` entries, each fresh for
    /// `ttl` after its last write
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            inner: RwLock::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Look up a key, refreshing its recency on a hit
    ///
    /// Expired entries are removed lazily here rather than swept in the
    /// background. A racing `get` may still observe a hit for an entry
    /// whose removal is concurrently in flight; that is accepted.
    pub fn get(&self, key: &str) -> Option<V> {
        // Fast path under the shared lock: presence and freshness only.
        let expired = {
            let cache = self.inner.read();
            match cache.peek(key) {
                None => return None,
                Some(entry) => entry.is_expired(self.ttl),
            }
        };

        if expired {
            // Upgrade to the exclusive lock to remove, re-checking expiry so
            // a concurrent racer cannot trigger a duplicate removal.
            let mut cache = self.inner.write();
            let still_expired = cache
                .peek(key)
                .is_some_and(|entry| entry.is_expired(self.ttl));
            if still_expired {
                cache.pop(key);
                debug!(%key, "evicted expired entry");
            }
            return None;
        }

        // Exclusive lock scoped to the recency update; the entry may have
        // been removed or expired between the two locks.
        let mut cache = self.inner.write();
        let entry_expired = match cache.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if entry_expired {
            cache.pop(key);
        }
        None
    }

    /// Insert or update a key at the most-recently-used position with a
    /// fresh timestamp, evicting the least-recently-used entry when at
    /// capacity
    pub fn put(&self, key: String, value: V) {
        let mut cache = self.inner.write();
        cache.put(key, CacheEntry::new(value));
    }

    /// Current number of entries (expired-but-unswept entries included)
    ///
    /// Exclusive-locked, like `clear`, so the count is a settled snapshot
    /// rather than one taken alongside an in-flight upgrade in `get`.
    pub fn len(&self) -> usize {
        self.inner.write().len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.write().is_empty()
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.inner.read().cap().get()
    }

    /// Atomically drop every entry
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
