//! CLI entry point - the composition root.
//!
//! Configuration is resolved once here and handed to either the web server
//! or the one-shot command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use giftlist_cli::bootstrap::{bootstrap, resolve_config};
use giftlist_cli::{Cli, Commands, handlers};

fn init_tracing(verbose: bool) {
    let directives = log_directives(verbose, std::env::var("RUST_LOG").ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .init();
}

/// `--verbose` forces debug; otherwise `RUST_LOG` applies, defaulting to info.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;

    match cli.command.unwrap_or_default() {
        Commands::Serve { .. } => {
            handlers::serve::execute(config).await?;
        }
        Commands::List => {
            let ctx = bootstrap(&config.backend).await?;
            handlers::list::execute(&ctx).await?;
        }
        Commands::Buy { id } => {
            let ctx = bootstrap(&config.backend).await?;
            handlers::buy::execute(&ctx, &id).await?;
        }
        Commands::Init => {
            let ctx = bootstrap(&config.backend).await?;
            handlers::init::execute(&ctx)?;
        }
    }

    Ok(())
}
