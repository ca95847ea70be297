//! Redis distributed cache tier
//!
//! The second tier of the lookup chain: a thin client over Redis with a
//! per-call deadline and a no-op mode for when Redis is disabled or
//! unreachable. Every failure here degrades to a miss; the tier is an
//! optimization, never a source of truth.
//!
//! ## Module Structure
//!
//! - `pool` - Connection setup, no-op mode, liveness probe
//! - `cache` - Typed get/set with JSON serialization and timeouts
//! - `tier` - `DistributedCache` seam implementation
//! - `tests` - Module tests

mod cache;
mod pool;
mod tier;

#[cfg(test)]
mod tests;

pub use pool::RedisTier;
