//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::admission::AdmissionGate;
use crate::core::coordinator::CacheCoordinator;
use crate::core::generator::TemplateGenerator;
use crate::storage::redis::RedisTier;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Constructed once at startup; the coordinator and gate are explicit
/// dependencies of every handler, not package-level globals.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Tiered cache coordinator
    pub coordinator: Arc<CacheCoordinator<TemplateGenerator, RedisTier>>,
    /// Admission gate bounding in-flight requests
    pub gate: AdmissionGate,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(
        config: Config,
        coordinator: CacheCoordinator<TemplateGenerator, RedisTier>,
        gate: AdmissionGate,
    ) -> Self {
        Self {
            config: Arc::new(config),
            coordinator: Arc::new(coordinator),
            gate,
        }
    }
}
