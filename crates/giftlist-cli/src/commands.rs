//! Subcommand definitions.

use clap::Subcommand;

/// Top-level subcommands. `serve` runs when none is given.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the gift list over HTTP
    Serve {
        /// Listen address (env: HOST)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (env: PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print every gift and whether it is still available
    List,
    /// Mark a gift as bought
    Buy {
        /// Gift id as shown by `list`
        id: String,
    },
    /// Create and seed the store, then exit
    Init,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Serve {
            host: None,
            port: None,
        }
    }
}
