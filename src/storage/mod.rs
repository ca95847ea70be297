//! Storage backends

pub mod redis;

pub use redis::RedisTier;
