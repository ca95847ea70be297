//! Coordinator tests

use super::coordinator::{CacheCoordinator, cache_key};
use super::tier::DistributedCache;
use super::types::CacheStatus;
use crate::core::cache::LocalCache;
use crate::core::generator::{
    ComponentGenerator, ComponentMetadata, GenerateError, LocalizedComponent,
};
use crate::storage::redis::RedisTier;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Generator fake that counts invocations
struct CountingGenerator {
    calls: Arc<AtomicUsize>,
}

impl CountingGenerator {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl ComponentGenerator for CountingGenerator {
    fn generate(
        &self,
        component_type: &str,
        lang: &str,
    ) -> std::result::Result<LocalizedComponent, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if component_type == "unknown" {
            return Err(GenerateError::UnknownComponent(component_type.to_string()));
        }
        Ok(component(component_type, lang))
    }
}

fn component(component_type: &str, lang: &str) -> LocalizedComponent {
    LocalizedComponent {
        component_name: format!("{}Component", component_type),
        component_type: "functional".to_string(),
        language: lang.to_string(),
        template: format!("<{} lang={}/>", component_type, lang),
        localized_data: Default::default(),
        metadata: ComponentMetadata {
            component_id: format!("{}_{}_0", component_type, lang),
            last_updated: "2024-01-01T00:00:00Z".to_string(),
            required_keys: vec![],
        },
    }
}

/// Tier fake that counts calls and stores entries in memory
#[derive(Clone, Default)]
struct CountingTier {
    entries: Arc<Mutex<HashMap<String, LocalizedComponent>>>,
    gets: Arc<AtomicUsize>,
    sets: Arc<AtomicUsize>,
}

#[async_trait]
impl DistributedCache for CountingTier {
    async fn get(&self, key: &str) -> Option<LocalizedComponent> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().get(key).cloned()
    }

    async fn set(&self, key: &str, component: &LocalizedComponent, _ttl: Duration) -> Result<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().insert(key.to_string(), component.clone());
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

fn coordinator(capacity: usize) -> (CacheCoordinator<CountingGenerator, RedisTier>, Arc<AtomicUsize>) {
    let (generator, calls) = CountingGenerator::new();
    let local = LocalCache::new(
        NonZeroUsize::new(capacity).unwrap(),
        Duration::from_secs(60),
    );
    let distributed = RedisTier::noop(Duration::from_millis(100));
    (
        CacheCoordinator::new(local, distributed, generator, Duration::from_secs(60)),
        calls,
    )
}

#[test]
fn test_cache_key_format() {
    assert_eq!(cache_key("welcome", "en"), "component:welcome:en");
    // Identical logical requests always produce identical keys.
    assert_eq!(cache_key("welcome", "en"), cache_key("welcome", "en"));
    assert_ne!(cache_key("welcome", "en"), cache_key("welcome", "de"));
}

#[tokio::test]
async fn test_full_miss_generates_and_populates_local() {
    let (coordinator, calls) = coordinator(4);

    let (component, status) = coordinator.get("welcome", "en").await.unwrap();
    assert_eq!(status, CacheStatus::Generated);
    assert_eq!(component.language, "en");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.local_size(), 1);
}

#[tokio::test]
async fn test_local_hit_skips_generator() {
    let (coordinator, calls) = coordinator(4);

    let (first, _) = coordinator.get("welcome", "en").await.unwrap();
    let (second, status) = coordinator.get("welcome", "en").await.unwrap();

    assert_eq!(status, CacheStatus::LocalHit);
    assert_eq!(first.template, second.template);
    // The generator ran only for the initial miss.
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let stats = coordinator.stats();
    assert_eq!(stats.local_hits, 1);
    assert_eq!(stats.generated, 1);
}

#[tokio::test]
async fn test_distinct_keys_generate_independently() {
    let (coordinator, calls) = coordinator(4);

    coordinator.get("welcome", "en").await.unwrap();
    coordinator.get("welcome", "de").await.unwrap();
    coordinator.get("footer", "en").await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(coordinator.local_size(), 3);
}

#[tokio::test]
async fn test_not_found_propagates_and_is_never_cached() {
    let (coordinator, calls) = coordinator(4);

    let err = coordinator.get("unknown", "en").await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
    assert_eq!(coordinator.local_size(), 0);

    // No negative caching: the second lookup hits the generator again.
    let err = coordinator.get("unknown", "en").await.unwrap_err();
    assert!(matches!(err, GatewayError::NotFound(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(coordinator.stats().not_found, 2);
}

#[tokio::test]
async fn test_degraded_tier_never_reaches_caller() {
    // With the distributed tier in no-op mode the chain degrades silently
    // to generation; the caller sees a normal response.
    let (coordinator, calls) = coordinator(4);

    let (_, status) = coordinator.get("navigation", "fr").await.unwrap();
    assert_eq!(status, CacheStatus::Generated);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!coordinator.distributed_reachable().await);
}

fn tiered_coordinator(
    capacity: usize,
) -> (
    CacheCoordinator<CountingGenerator, CountingTier>,
    Arc<AtomicUsize>,
    CountingTier,
) {
    let (generator, calls) = CountingGenerator::new();
    let local = LocalCache::new(
        NonZeroUsize::new(capacity).unwrap(),
        Duration::from_secs(60),
    );
    let tier = CountingTier::default();
    (
        CacheCoordinator::new(local, tier.clone(), generator, Duration::from_secs(60)),
        calls,
        tier,
    )
}

#[tokio::test]
async fn test_distributed_hit_populates_local_and_skips_generator() {
    let (coordinator, calls, tier) = tiered_coordinator(4);
    let key = cache_key("welcome", "en");
    tier.entries.lock().insert(key, component("welcome", "en"));

    let (served, status) = coordinator.get("welcome", "en").await.unwrap();
    assert_eq!(status, CacheStatus::DistributedHit);
    assert_eq!(served.component_name, "welcomeComponent");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(tier.gets.load(Ordering::SeqCst), 1);

    // The hit populated the local cache; the next lookup never leaves the
    // process.
    assert_eq!(coordinator.local_size(), 1);
    let (_, status) = coordinator.get("welcome", "en").await.unwrap();
    assert_eq!(status, CacheStatus::LocalHit);
    assert_eq!(tier.gets.load(Ordering::SeqCst), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let stats = coordinator.stats();
    assert_eq!(stats.distributed_hits, 1);
    assert_eq!(stats.local_hits, 1);
    assert_eq!(stats.generated, 0);
}

#[tokio::test]
async fn test_distributed_hit_refreshes_remote_ttl() {
    let (coordinator, _calls, tier) = tiered_coordinator(4);
    let key = cache_key("footer", "de");
    tier.entries.lock().insert(key, component("footer", "de"));

    let (_, status) = coordinator.get("footer", "de").await.unwrap();
    assert_eq!(status, CacheStatus::DistributedHit);

    // The refresh runs on a detached task; give it a moment to land.
    for _ in 0..50 {
        if tier.sets.load(Ordering::SeqCst) > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(tier.sets.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_generation_populates_both_tiers() {
    let (coordinator, calls, tier) = tiered_coordinator(4);

    let (_, status) = coordinator.get("navigation", "fr").await.unwrap();
    assert_eq!(status, CacheStatus::Generated);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.local_size(), 1);

    // The tier was consulted once (miss) and populated synchronously.
    assert_eq!(tier.gets.load(Ordering::SeqCst), 1);
    assert_eq!(tier.sets.load(Ordering::SeqCst), 1);
    assert!(
        tier.entries
            .lock()
            .contains_key(&cache_key("navigation", "fr"))
    );
}

#[tokio::test]
async fn test_eviction_falls_back_to_generation() {
    let (coordinator, calls) = coordinator(1);

    coordinator.get("welcome", "en").await.unwrap();
    coordinator.get("footer", "en").await.unwrap();
    assert_eq!(coordinator.local_size(), 1);

    // "welcome" was evicted by capacity; the lookup regenerates it.
    let (_, status) = coordinator.get("welcome", "en").await.unwrap();
    assert_eq!(status, CacheStatus::Generated);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
