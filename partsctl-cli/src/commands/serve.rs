//! HTTP server command for the partsctl catalog API
//!
//! Connects to the configured store (or builds the in-memory fixture with
//! `--demo`) and serves until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;

use partsctl_server::db::{create_memory_pool, create_pool_with_options, schema};
use partsctl_server::http::{run_server, AppState, ServerConfig};
use partsctl_server::SqlCatalog;

use super::resolve_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASS)
    #[arg(long, env = "DATABASE_URL", conflicts_with = "demo")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Serve the built-in reference fixture from an in-memory SQLite store
    #[arg(long)]
    pub demo: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = if args.demo {
        tracing::info!("Demo mode: serving the reference fixture from memory");
        let pool = create_memory_pool()
            .await
            .context("Failed to open in-memory store")?;
        schema::create(&pool)
            .await
            .context("Failed to create demo schema")?;
        schema::seed_fixture(&pool)
            .await
            .context("Failed to load demo fixture")?;
        pool
    } else {
        let database_url = resolve_database_url(args.database_url);
        create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?
    };

    tracing::info!("Starting partsctl server on {}", args.bind);

    let state = AppState::new(Arc::new(SqlCatalog::new(pool)));
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
