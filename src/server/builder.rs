//! Server startup
//!
//! Loads configuration from the environment, builds the HTTP server, and
//! runs it.

use crate::config::Config;
use crate::core::generator::{available_components, available_languages};
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with configuration from the environment
pub async fn run_server() -> Result<()> {
    info!("Starting localization component gateway");

    let config = Config::from_env()?;

    let server = HttpServer::new(&config).await?;

    info!(
        "Server starting at: http://{}:{}",
        config.server.host, config.server.port
    );
    info!("Available components: {}", available_components().join(", "));
    info!("Supported languages: {}", available_languages().join(", "));
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/component/{{component_type}}?lang=xx - Localized component");

    server.start().await
}
