//! Coordinator type definitions

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Which tier served a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// Served from the in-process cache
    LocalHit,
    /// Served from the distributed tier
    DistributedHit,
    /// Freshly generated on full miss
    Generated,
}

impl CacheStatus {
    /// Whether the response came from a cache tier rather than generation
    pub fn is_cached(&self) -> bool {
        !matches!(self, Self::Generated)
    }
}

/// Lock-free hit/miss counters for the hot path
#[derive(Debug, Default)]
pub struct AtomicCoordinatorStats {
    /// Lookups served by the local cache
    pub local_hits: AtomicU64,
    /// Lookups served by the distributed tier
    pub distributed_hits: AtomicU64,
    /// Lookups that fell through to generation
    pub generated: AtomicU64,
    /// Lookups where even generation reported not-found
    pub not_found: AtomicU64,
}

impl AtomicCoordinatorStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> CoordinatorStats {
        CoordinatorStats {
            local_hits: self.local_hits.load(Ordering::Relaxed),
            distributed_hits: self.distributed_hits.load(Ordering::Relaxed),
            generated: self.generated.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// Coordinator statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, Serialize)]
pub struct CoordinatorStats {
    /// Lookups served by the local cache
    pub local_hits: u64,
    /// Lookups served by the distributed tier
    pub distributed_hits: u64,
    /// Lookups that fell through to generation
    pub generated: u64,
    /// Lookups where even generation reported not-found
    pub not_found: u64,
}

impl CoordinatorStats {
    /// Fraction of resolved lookups served by a cache tier
    pub fn hit_rate(&self) -> f64 {
        let hits = self.local_hits + self.distributed_hits;
        let total = hits + self.generated;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_status_is_cached() {
        assert!(CacheStatus::LocalHit.is_cached());
        assert!(CacheStatus::DistributedHit.is_cached());
        assert!(!CacheStatus::Generated.is_cached());
    }

    #[test]
    fn test_hit_rate() {
        let stats = CoordinatorStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        let stats = CoordinatorStats {
            local_hits: 6,
            distributed_hits: 2,
            generated: 2,
            not_found: 1,
        };
        assert!((stats.hit_rate() - 0.8).abs() < f64::EPSILON);
    }
}
