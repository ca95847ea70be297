//! In-process TTL+LRU cache
//!
//! The first tier of the lookup chain: a bounded cache combining LRU
//! eviction with lazy TTL expiry, shared across request workers behind a
//! reader/writer lock.

pub mod local;
pub mod types;


pub use local::LocalCache;
pub use types::CacheEntry;
