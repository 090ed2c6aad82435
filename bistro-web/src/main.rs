//! bistro-web - Restaurant review web application
//!
//! Serves the restaurant list, detail, and review-submission pages over a
//! SQLite store. The schema is created automatically at startup.

use anyhow::Result;
use bistro_common::config::{resolve_database_path, Environment};
use bistro_common::db::init_database;
use bistro_web::{build_router, AppState};
use clap::Parser;
use tracing::{error, info};

/// Command-line arguments for bistro-web
#[derive(Parser, Debug)]
#[command(name = "bistro-web")]
#[command(about = "Restaurant review web application")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "BISTRO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5730", env = "BISTRO_PORT")]
    port: u16,

    /// Database file path (overrides environment and config file)
    #[arg(short, long)]
    database: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Bistro (bistro-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let environment = Environment::detect();
    info!("Loading {} configuration", environment.as_str());

    let db_path = resolve_database_path(args.database.as_deref(), environment)?;
    info!("Database path: {}", db_path.display());

    let pool = match init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("bistro-web listening on http://{}:{}", args.host, args.port);
    info!("Health check: http://{}:{}/health", args.host, args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
