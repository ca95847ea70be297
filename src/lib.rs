//! # l10n-gateway
//!
//! A localization component gateway: serves localized UI component templates
//! rendered from an embedded template/translation catalog, behind a tiered
//! cache (in-process TTL+LRU, then an optional Redis tier, then generation)
//! and a fixed-capacity admission gate that sheds excess load.
//!
//! ## Request path
//!
//! ```text
//! request -> AdmissionGate (fail-fast when saturated)
//!         -> CacheCoordinator: LocalCache -> RedisTier -> ComponentGenerator
//!         -> response
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use l10n_gateway::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = HttpServer::new(&config).await?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::admission::{AdmissionGate, AdmissionPermit};
pub use core::cache::LocalCache;
pub use core::coordinator::{CacheCoordinator, CacheStatus, cache_key};
pub use core::generator::{ComponentGenerator, GenerateError, LocalizedComponent, TemplateGenerator};
pub use storage::redis::RedisTier;
pub use utils::error::{GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
