//! folioctl - Portfolio content API tooling
//!
//! This is the main entry point for the folioctl command-line tool, which
//! provides:
//! - HTTP API server for the portfolio frontend (`serve` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "folioctl",
    author,
    version,
    about = "Content API server for the folio portfolio site",
    long_about = "Serve the portfolio content API: articles, projects, experiences, and \
                  education records stored in MongoDB, exposed as CRUD JSON endpoints \
                  consumed by the site frontend."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (articles, projects, experiences, education)
    Serve(commands::serve::ServeArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();

    // Load .env before parsing so env-backed args see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
