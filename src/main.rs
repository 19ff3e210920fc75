use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod store;

use config::{AppConfig, StoreConfig};
use metrics::Metrics;
use store::{InMemoryOrderStore, OrderStore, PgOrderStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env file; real environment variables win
    let dotenv = dotenvy::dotenv();

    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,purchase_orders=debug")),
        )
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let config = AppConfig::from_env()?;
    tracing::info!("Starting purchase order service");

    // === 1. Order store ===
    let store: Arc<dyn OrderStore> = match &config.store {
        StoreConfig::Postgres(db) => {
            let pg = PgOrderStore::connect(db).await?;
            pg.migrate().await?;
            Arc::new(pg)
        }
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory order store; data is lost on shutdown");
            Arc::new(InMemoryOrderStore::new())
        }
    };

    // === 2. Prometheus metrics ===
    let metrics = web::Data::new(Metrics::new()?);
    tracing::info!(
        "Metrics registry created with {} metrics",
        metrics.registry().gather().len()
    );

    // === 3. HTTP server ===
    let store = web::Data::from(store);
    let cors_origin = config.cors_allowed_origin.clone();
    let bind = (config.server.host.clone(), config.server.port);

    tracing::info!(
        host = %bind.0,
        port = bind.1,
        store = store.backend(),
        cors_origin = %cors_origin,
        "Listening for HTTP requests"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(metrics.clone())
            .app_data(api::json_config())
            .app_data(api::path_config())
            .wrap(api::cors(&cors_origin))
            .wrap(from_fn(api::observe_request))
            .configure(api::routes)
    })
    .bind(bind)?
    .run()
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}
