//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use partsctl_server::db::{create_pool, schema};

use super::resolve_database_url;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// Database URL (overrides DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASS)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Also load the reference fixture (existing rows are kept)
    #[arg(long)]
    pub seed: bool,
}

/// Create the catalog tables, then optionally seed them
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let database_url = resolve_database_url(args.database_url);
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    schema::create(&pool)
        .await
        .context("Failed to create catalog schema")?;

    if args.seed {
        schema::seed_fixture(&pool)
            .await
            .context("Failed to load reference fixture")?;
    }

    pool.close().await;
    println!("Catalog schema ready{}", if args.seed { " (fixture loaded)" } else { "" });
    Ok(())
}
