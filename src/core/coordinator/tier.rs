//! Distributed tier seam
//!
//! The coordinator talks to the distributed cache through this trait so the
//! tier can be swapped out: Redis in production, an in-memory fake under
//! test. Implementations absorb their own failures; a broken tier looks
//! like a miss, never an error.

use crate::core::generator::LocalizedComponent;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The distributed cache tier as the coordinator sees it
#[async_trait]
pub trait DistributedCache: Send + Sync {
    /// Fetch a component; any tier failure is reported as a miss
    async fn get(&self, key: &str) -> Option<LocalizedComponent>;

    /// Store a component with remote-side expiry
    ///
    /// The error is surfaced for logging only; callers never fail a
    /// request on it.
    async fn set(&self, key: &str, component: &LocalizedComponent, ttl: Duration) -> Result<()>;

    /// Cheap liveness probe for health reporting
    async fn ping(&self) -> bool;
}
