//! CLI bootstrap - the composition root.
//!
//! Resolves configuration from command-line overrides and the environment,
//! then wires the selected store into a `RegistryService` for the one-shot
//! commands. `serve` hands the resolved configuration to the web adapter
//! instead.

use std::sync::Arc;

use anyhow::{Context, Result};
use giftlist_core::{AppConfig, RegistryService, SeedCatalog, StoreBackend};
use giftlist_db::StoreFactory;

use crate::parser::Cli;

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The registry facade.
    pub registry: Arc<RegistryService>,
    /// Gifts written by the startup seed (0 when the store was populated).
    pub seeded: usize,
}

/// Resolve the application configuration for `cli`.
///
/// Command-line values win over the process environment.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    resolve_config_with(cli, |key| std::env::var(key).ok())
}

/// Like [`resolve_config`], with an explicit environment lookup.
pub fn resolve_config_with<F>(cli: &Cli, env: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = cli.env_overrides();
    AppConfig::from_lookup(|key| overrides.get(key).cloned().or_else(|| env(key)))
        .context("Invalid configuration")
}

/// Bootstrap the CLI application.
///
/// Opens the configured store and runs the startup seed, so every command
/// sees an initialized store. Failure here is fatal for the command.
pub async fn bootstrap(backend: &StoreBackend) -> Result<CliContext> {
    let store = StoreFactory::build(backend)
        .await
        .with_context(|| format!("Failed to open {} gift store", backend.kind()))?;

    let registry = RegistryService::new(store, SeedCatalog::default());
    let seeded = registry
        .initialize()
        .await
        .context("Failed to initialize gift store")?;

    Ok(CliContext {
        registry: Arc::new(registry),
        seeded,
    })
}
