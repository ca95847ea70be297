//! Tiered cache coordination
//!
//! Single entry point over the lookup chain: local cache, then the
//! distributed tier, then generation, populating the tiers on the way
//! back out.

pub mod coordinator;
pub mod tier;
pub mod types;

#[cfg(test)]
mod tests;

pub use coordinator::{CacheCoordinator, cache_key};
pub use tier::DistributedCache;
pub use types::{CacheStatus, CoordinatorStats};
