//! Cache coordinator implementation

use super::tier::DistributedCache;
use super::types::{AtomicCoordinatorStats, CacheStatus, CoordinatorStats};
use crate::core::cache::LocalCache;
use crate::core::generator::{ComponentGenerator, LocalizedComponent};
use crate::utils::error::{GatewayError, Result};
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::{debug, warn};

/// Stable namespace prefix for distributed and local keys
const KEY_NAMESPACE: &str = "component";

/// Build the cache key for a (type, language) pair
///
/// Identical logical requests always produce identical keys; equality is
/// byte-exact and no normalization happens at the cache layer.
pub fn cache_key(component_type: &str, lang: &str) -> String {
    format!("{}:{}:{}", KEY_NAMESPACE, component_type, lang)
}

/// Orchestrates lookups across local cache, distributed tier, and generator
///
/// Constructed once at startup and passed by reference to request handlers;
/// there is no global instance.
///
/// Concurrent lookups for the same missing key each invoke the generator
/// and populate both tiers independently; there is no per-key single-flight
/// deduplication. Generation here is cheap, idempotent string rendering, so
/// a stampede costs redundant CPU, never correctness.
pub struct CacheCoordinator<G, D> {
    local: LocalCache<LocalizedComponent>,
    distributed: D,
    generator: G,
    distributed_ttl: Duration,
    stats: AtomicCoordinatorStats,
}

impl<G, D> CacheCoordinator<G, D>
where
    G: ComponentGenerator,
    D: DistributedCache + Clone + 'static,
{
    /// Create a coordinator over the given tiers and generator
    pub fn new(
        local: LocalCache<LocalizedComponent>,
        distributed: D,
        generator: G,
        distributed_ttl: Duration,
    ) -> Self {
        Self {
            local,
            distributed,
            generator,
            distributed_ttl,
            stats: AtomicCoordinatorStats::default(),
        }
    }

    /// Look up a component, in strict tier precedence order
    ///
    /// Local hit: return immediately, no other tier is touched.
    /// Distributed hit: populate the local cache synchronously, refresh the
    /// remote TTL on a detached best-effort task, return.
    /// Full miss: generate; not-found propagates (and is never cached),
    /// success populates both tiers synchronously.
    pub async fn get(
        &self,
        component_type: &str,
        lang: &str,
    ) -> Result<(LocalizedComponent, CacheStatus)> {
        let key = cache_key(component_type, lang);

        if let Some(component) = self.local.get(&key) {
            self.stats.local_hits.fetch_add(1, Ordering::Relaxed);
            debug!(%key, "local cache hit");
            return Ok((component, CacheStatus::LocalHit));
        }

        if let Some(component) = self.distributed.get(&key).await {
            self.stats.distributed_hits.fetch_add(1, Ordering::Relaxed);
            debug!(%key, "distributed tier hit");

            self.local.put(key.clone(), component.clone());
            self.spawn_ttl_refresh(key, component.clone());

            return Ok((component, CacheStatus::DistributedHit));
        }

        let component = self
            .generator
            .generate(component_type, lang)
            .map_err(|e| {
                self.stats.not_found.fetch_add(1, Ordering::Relaxed);
                GatewayError::NotFound(e.to_string())
            })?;

        self.stats.generated.fetch_add(1, Ordering::Relaxed);
        debug!(%key, "generated on full miss");

        self.local.put(key.clone(), component.clone());
        if let Err(e) = self
            .distributed
            .set(&key, &component, self.distributed_ttl)
            .await
        {
            warn!(%key, error = %e, "failed to populate distributed tier");
        }

        Ok((component, CacheStatus::Generated))
    }

    /// Refresh the remote TTL without blocking the response path
    ///
    /// Best-effort: the task holds no completion signal and may be dropped
    /// at shutdown. A refresh racing a later write for the same key may
    /// land after it; acceptable for a best-effort cache.
    fn spawn_ttl_refresh(&self, key: String, component: LocalizedComponent) {
        let distributed = self.distributed.clone();
        let ttl = self.distributed_ttl;
        tokio::spawn(async move {
            if let Err(e) = distributed.set(&key, &component, ttl).await {
                debug!(%key, error = %e, "distributed ttl refresh failed");
            }
        });
    }

    /// Current local cache entry count, for health reporting
    pub fn local_size(&self) -> usize {
        self.local.len()
    }

    /// Probe distributed tier reachability, for health reporting
    pub async fn distributed_reachable(&self) -> bool {
        self.distributed.ping().await
    }

    /// Hit/miss counters snapshot
    pub fn stats(&self) -> CoordinatorStats {
        self.stats.snapshot()
    }
}
