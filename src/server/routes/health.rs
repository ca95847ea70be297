//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health check handler
///
/// Reports liveness plus the introspection points the core exposes: local
/// cache size, admission gate capacity, distributed tier reachability, and
/// hit/miss counters. Internal lock state is never exposed.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let redis_status = if state.coordinator.distributed_reachable().await {
        "connected"
    } else {
        "disconnected"
    };

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": crate::NAME,
        "version": crate::VERSION,
        "cache_size": state.coordinator.local_size(),
        "concurrency_limit": state.gate.capacity(),
        "redis_status": redis_status,
        "cache_stats": state.coordinator.stats(),
    })))
}
