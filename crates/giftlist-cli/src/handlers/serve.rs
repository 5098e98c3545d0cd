//! Serve command handler.

use anyhow::Result;
use giftlist_core::AppConfig;

/// Execute the serve command.
///
/// Blocks until the server receives a shutdown signal.
pub async fn execute(config: AppConfig) -> Result<()> {
    tracing::info!(
        backend = %config.backend.kind(),
        address = %config.http.bind_address(),
        "Starting gift registry server"
    );
    giftlist_axum::start_server(config).await
}
