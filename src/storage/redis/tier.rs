//! Distributed tier seam implementation for Redis

use super::pool::RedisTier;
use crate::core::coordinator::DistributedCache;
use crate::core::generator::LocalizedComponent;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
impl DistributedCache for RedisTier {
    async fn get(&self, key: &str) -> Option<LocalizedComponent> {
        self.get::<LocalizedComponent>(key).await
    }

    async fn set(&self, key: &str, component: &LocalizedComponent, ttl: Duration) -> Result<()> {
        self.set::<LocalizedComponent>(key, component, ttl).await
    }

    async fn ping(&self) -> bool {
        RedisTier::ping(self).await
    }
}
