//! HTTP server command for the folio content API
//!
//! Connects to MongoDB, verifies the store is reachable, then runs the
//! axum server until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use folio_server::http::{run_server, ServerConfig};
use folio_server::store::{Store, DEFAULT_DATABASE};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// MongoDB connection string (overrides environment)
    #[arg(long, env = "MONGODB_URI")]
    pub database_url: Option<String>,

    /// Database name (default: portfolio)
    #[arg(long, env = "MONGODB_DB")]
    pub database_name: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Load connection string from args, env, or .env
    let database_url = args
        .database_url
        .or_else(|| std::env::var("MONGODB_URI").ok())
        .context("MONGODB_URI not set. Set via --database-url, MONGODB_URI env, or .env")?;
    let database_name = args
        .database_name
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

    tracing::info!("Starting folio server on {}", args.bind);

    // Build the store client
    let store = Store::connect(&database_url, &database_name)
        .await
        .context("Failed to create store client")?;

    // An unreachable or misconfigured store is fatal before binding
    store
        .ping()
        .await
        .context("Failed to reach the document store")?;

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
