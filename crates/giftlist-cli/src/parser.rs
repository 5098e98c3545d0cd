//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::collections::HashMap;

use clap::Parser;
use giftlist_core::config::{ENV_BACKEND, ENV_DATABASE_URL, ENV_GIFTS_FILE, ENV_HOST, ENV_PORT};

use crate::commands::Commands;

/// Command-line interface definition for the gift registry.
///
/// Global options override the matching environment variables.
#[derive(Parser)]
#[command(name = "giftlist")]
#[command(about = "Serve and manage a single-event gift registry")]
#[command(version)]
pub struct Cli {
    /// Storage backend: sqlite or json (env: GIFTLIST_BACKEND)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Full SQLite connection URL (env: DATABASE_URL)
    #[arg(long = "database-url", global = true)]
    pub database_url: Option<String>,

    /// Path of the JSON gift file (env: GIFTS_FILE)
    #[arg(long = "gifts-file", global = true)]
    pub gifts_file: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Command-line values keyed by the environment variable they override.
    pub fn env_overrides(&self) -> HashMap<&'static str, String> {
        let mut overrides = HashMap::new();

        if let Some(backend) = &self.backend {
            overrides.insert(ENV_BACKEND, backend.clone());
        }
        if let Some(url) = &self.database_url {
            overrides.insert(ENV_DATABASE_URL, url.clone());
        }
        if let Some(path) = &self.gifts_file {
            overrides.insert(ENV_GIFTS_FILE, path.clone());
        }
        if let Some(Commands::Serve { host, port }) = &self.command {
            if let Some(host) = host {
                overrides.insert(ENV_HOST, host.clone());
            }
            if let Some(port) = port {
                overrides.insert(ENV_PORT, port.to_string());
            }
        }

        overrides
    }
}
