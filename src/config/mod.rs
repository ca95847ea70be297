//! Gateway configuration
//!
//! Configuration is assembled from defaults and overridden by environment
//! variables. Invalid values are a startup error, never a runtime condition.

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

/// Top-level gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Local cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Distributed cache tier configuration
    #[serde(default)]
    pub redis: RedisConfig,
    /// Admission gate configuration
    #[serde(default)]
    pub admission: AdmissionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Local TTL+LRU cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_size: usize,
    /// Entry TTL in seconds, counted from the last write
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 50,
            ttl_secs: 600,
        }
    }
}

impl CacheConfig {
    /// Entry TTL as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Capacity as `NonZeroUsize`; `None` when misconfigured to zero
    pub fn capacity(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.max_size)
    }
}

/// Redis tier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL
    pub url: String,
    /// Enable the Redis tier (if false, every tier call is a no-op miss)
    pub enabled: bool,
    /// Remote-side entry TTL in seconds
    pub ttl_secs: u64,
    /// Per-call deadline in milliseconds
    pub timeout_ms: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            enabled: true,
            ttl_secs: 1800,
            timeout_ms: 2000,
        }
    }
}

impl RedisConfig {
    /// Remote-side TTL as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Per-call deadline as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Admission gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Maximum number of concurrently in-flight guarded requests
    pub concurrency_limit: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            concurrency_limit: 20,
        }
    }
}

impl Config {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid port: {}", e)))?;
        }

        if let Ok(max_size) = env::var("CACHE_MAX_SIZE") {
            config.cache.max_size = max_size
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid cache max size: {}", e)))?;
        }
        if let Ok(ttl) = env::var("CACHE_TTL_SECS") {
            config.cache.ttl_secs = ttl
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid cache ttl: {}", e)))?;
        }

        if let Ok(url) = env::var("REDIS_URL") {
            config.redis.url = url;
        }
        if let Ok(enabled) = env::var("REDIS_ENABLED") {
            config.redis.enabled = enabled
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid redis enabled flag: {}", e)))?;
        }
        if let Ok(ttl) = env::var("REDIS_TTL_SECS") {
            config.redis.ttl_secs = ttl
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid redis ttl: {}", e)))?;
        }
        if let Ok(timeout) = env::var("REDIS_TIMEOUT_MS") {
            config.redis.timeout_ms = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid redis timeout: {}", e)))?;
        }

        if let Ok(limit) = env::var("CONCURRENCY_LIMIT") {
            config.admission.concurrency_limit = limit
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid concurrency limit: {}", e)))?;
        }

        config.validate()?;

        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Validate the configuration; called at startup, failures are fatal
    pub fn validate(&self) -> Result<()> {
        if self.cache.max_size == 0 {
            return Err(GatewayError::Config(
                "cache max size must be greater than 0".to_string(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(GatewayError::Config(
                "cache ttl must be greater than 0".to_string(),
            ));
        }
        if self.redis.ttl_secs == 0 {
            return Err(GatewayError::Config(
                "redis ttl must be greater than 0".to_string(),
            ));
        }
        if self.redis.timeout_ms == 0 {
            return Err(GatewayError::Config(
                "redis timeout must be greater than 0".to_string(),
            ));
        }
        if self.admission.concurrency_limit == 0 {
            return Err(GatewayError::Config(
                "concurrency limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cache.max_size, 50);
        assert_eq!(config.admission.concurrency_limit, 20);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = Config::default();
        config.cache.max_size = 0;
        assert!(matches!(
            config.validate(),
            Err(GatewayError::Config(_))
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = Config::default();
        config.cache.ttl_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.redis.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let mut config = Config::default();
        config.admission.concurrency_limit = 0;
        assert!(config.validate().is_err());
    }
}
