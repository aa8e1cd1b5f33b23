//! Binary entry point: parse flags, initialize logging, select the
//! catalog backend, and serve the API.

use anyhow::Result;
use clap::Parser;

use gallery_api::catalog::CatalogStore;
use gallery_api::config::Config;
use gallery_api::http;

/// REST API server for the heavy-gallery photo catalog demo.
#[derive(Parser)]
#[command(name = "gallery-api", version, about)]
struct Cli {
    /// HTTP listen port (overrides the PORT environment variable).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    // Backend selection happens exactly once; the store keeps whichever
    // mode it lands in for the process lifetime.
    let store = CatalogStore::connect(&config).await;

    http::serve(store, config.port).await
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
