//! HSL Congestion Sync - Route pattern import CLI
//!
//! Lists, reads and imports route patterns between the Digitransit
//! GraphQL API and PostgreSQL.

mod adapters;
mod application;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use adapters::{HttpTransitGraphQl, PgRoutePatternStore, PgRouteRepository};
use application::RoutePatternRepository;
use config::SyncConfig;

/// Route pattern repository with concrete adapters
pub type AppRoutePatternRepository =
    RoutePatternRepository<HttpTransitGraphQl, PgRouteRepository, PgRoutePatternStore>;

#[derive(Parser)]
#[command(name = "hsl-congestion-sync")]
#[command(about = "Import HSL route patterns into PostgreSQL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all stored route patterns
    List,

    /// Show a stored route pattern
    Get {
        /// Route pattern ID (e.g. "HSL:1001:0:01")
        id: String,
    },

    /// Fetch a route pattern from the API and store it
    Create {
        /// Route pattern ID (e.g. "HSL:1001:0:01")
        id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SyncConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::debug!("Database migrations completed");

    let graphql = Arc::new(HttpTransitGraphQl::new(&config.graphql)?);
    let routes = Arc::new(PgRouteRepository::new(pool.clone()));
    let store = Arc::new(PgRoutePatternStore::new(pool));
    let repo: AppRoutePatternRepository = RoutePatternRepository::new(graphql, routes, store);

    match cli.command {
        Commands::List => print_json(&repo.get_list().await?)?,
        Commands::Get { id } => print_json(&repo.get_by_id(&id).await?)?,
        Commands::Create { id } => print_json(&repo.create_by_id(&id).await?)?,
    }

    Ok(())
}
