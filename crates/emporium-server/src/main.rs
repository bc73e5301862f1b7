//! # Emporium Catalog Server
//!
//! Main entry point for the Emporium catalog backend: loads configuration,
//! connects the database pool, the Redis cache, and the asset host client,
//! then serves the REST API until shutdown.

use emporium_assets::HttpAssetStore;
use emporium_config::{AppConfig, ConfigLoader};
use emporium_core::{EmporiumError, EmporiumResult};
use emporium_repository::{create_pool, MySqlProductRepository};
use emporium_rest::{create_router, AppState};
use emporium_service::{ProductServiceImpl, RedisCacheService};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    startup::print_banner();
    info!("Starting Emporium Catalog Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> EmporiumResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    serve(config).await
}

async fn serve(config: AppConfig) -> EmporiumResult<()> {
    // Create database pool
    let db_pool = create_pool(&config.database).await?;

    // Run migrations
    db_pool.run_migrations().await?;

    // Create Redis cache (if enabled)
    let cache = if config.redis.enabled {
        let redis_cfg = deadpool_redis::Config::from_url(&config.redis.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| EmporiumError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        RedisCacheService::new(Arc::new(pool))
    } else {
        info!("Redis disabled; featured-products cache is a no-op");
        RedisCacheService::disabled()
    };

    // Create asset host client
    let asset_store = HttpAssetStore::new(&config.asset_host)?;

    // Wire the service with its shared collaborators
    let repository = Arc::new(MySqlProductRepository::new(db_pool));
    let product_service = Arc::new(ProductServiceImpl::new(
        repository,
        Arc::new(cache),
        Arc::new(asset_store),
    ));

    // Create application state and router
    let app_state = AppState::new(product_service);
    let router = create_router(app_state, &config.server);

    // Start the HTTP server
    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    startup::print_startup_info(config.server.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EmporiumError::Internal(format!("Failed to bind REST: {}", e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EmporiumError::Internal(format!("REST server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::new("info,emporium_service=debug,emporium_rest=debug,tower_http=debug")
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
