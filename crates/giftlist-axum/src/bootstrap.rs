//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The concrete store is instantiated here and
//! handed to the registry service; nothing else holds a global instance.

use std::sync::Arc;

use anyhow::{Context, Result};
use giftlist_core::{AppConfig, RegistryService, SeedCatalog, StoreBackend};
use giftlist_db::StoreFactory;

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// Registry facade over the configured gift store.
    pub registry: Arc<RegistryService>,
}

impl AxumContext {
    /// Wrap an already initialized registry service.
    pub const fn new(registry: Arc<RegistryService>) -> Self {
        Self { registry }
    }
}

/// Bootstrap the registry for the configured backend.
///
/// Builds the store, creates its schema or file and seeds it when empty.
/// Any failure here is fatal: the server cannot run without its store.
pub async fn bootstrap(backend: &StoreBackend) -> Result<AxumContext> {
    tracing::info!(
        target: "giftlist.bootstrap",
        backend = %backend.kind(),
        "Axum bootstrap resolved storage backend"
    );

    let store = StoreFactory::build(backend)
        .await
        .context("Gift store is unavailable")?;

    let registry = RegistryService::new(store, SeedCatalog::default());
    registry
        .initialize()
        .await
        .context("Failed to initialize gift store")?;

    Ok(AxumContext::new(Arc::new(registry)))
}

/// Bootstrap and serve until a shutdown signal arrives.
pub async fn start_server(config: AppConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config.backend).await?;
    let app = crate::routes::create_router(ctx);

    let addr = config.http.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("giftlist web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("giftlist web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
