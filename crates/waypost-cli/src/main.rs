mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use waypost::config::DEFAULT_CONFIG_FILE;
use waypost::Config;

#[derive(Parser)]
#[command(name = "waypost")]
#[command(version, about = "Waypost CLI - inspect and exercise a single-page app route table", long_about = None)]
struct Cli {
    /// Path to the route configuration
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log routing decisions (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a path against the route table
    Match {
        /// Path to match, e.g. /users/alice/profile
        path: String,
    },

    /// List routes in matching order
    Routes,

    /// Print a stored menu, or the menu projected from the routes
    Menu {
        /// Stored menu id (omit to project the route table)
        #[arg(long)]
        id: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve and load the page for a URL
    Page {
        /// Full URL; its last segment selects the page
        href: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;
    tracing::debug!(config = ?cli.config, routes = config.routes.len(), "configuration loaded");

    // Execute command
    match cli.command {
        Commands::Match { path } => {
            commands::matching::execute(&config, &path)?;
        }
        Commands::Routes => {
            commands::routes::execute(&config);
        }
        Commands::Menu { id, json } => {
            commands::menu::execute(&config, id.as_deref(), json)?;
        }
        Commands::Page { href } => {
            commands::page::execute(&config, &href).await?;
        }
    }

    Ok(())
}
