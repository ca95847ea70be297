//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::core::admission::AdmissionGate;
use crate::core::cache::LocalCache;
use crate::core::coordinator::CacheCoordinator;
use crate::core::generator::TemplateGenerator;
use crate::server::middleware::AdmissionMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::redis::RedisTier;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server, wiring the cache tiers, coordinator, and
    /// admission gate from configuration
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        config.validate()?;

        let capacity = config
            .cache
            .capacity()
            .ok_or_else(|| GatewayError::config("cache max size must be greater than 0"))?;

        let local = LocalCache::new(capacity, config.cache.ttl());
        let distributed = RedisTier::connect(&config.redis).await;
        if distributed.is_noop() {
            info!("Running without distributed cache tier");
        }

        let coordinator = CacheCoordinator::new(
            local,
            distributed,
            TemplateGenerator::new(),
            config.redis.ttl(),
        );
        let gate = AdmissionGate::new(config.admission.concurrency_limit);

        let state = AppState::new(config.clone(), coordinator, gate);

        Ok(Self {
            config: config.server.clone(),
            state,
        })
    }

    /// Start the HTTP server and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let state = self.state;
        let bind_addr = (self.config.host.clone(), self.config.port);

        info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

        ActixHttpServer::new(move || {
            let gate = state.gate.clone();
            App::new()
                .app_data(web::Data::new(state.clone()))
                .wrap(Logger::default())
                .configure(routes::health::configure_routes)
                .service(
                    web::scope("/api")
                        .wrap(AdmissionMiddleware::new(gate))
                        .route(
                            "/component/{component_type}",
                            web::get().to(routes::component::get_component),
                        ),
                )
        })
        .bind(bind_addr)?
        .run()
        .await?;

        Ok(())
    }
}
