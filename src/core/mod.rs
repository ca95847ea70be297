//! Core gateway functionality
//!
//! The cache coordination core: local TTL+LRU cache, distributed tier
//! orchestration, component generation, and admission control.

pub mod admission;
pub mod cache;
pub mod coordinator;
pub mod generator;
