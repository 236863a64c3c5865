use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use dotenvy::dotenv;
use store::PgStore;
use tokio::net::TcpListener;
use tracing::{error, info};

mod api;
mod config;
mod dal;
mod geo;
mod lookup;
mod model;
mod store;
mod telemetry;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    _ = dotenv();
    let config = Config::parse();

    let _telemetry = telemetry::init(&config)?;
    config.log();

    if let Err(e) = run(config).await {
        error!("{e:?}");
        return Err(e);
    }

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let pool = sqlx::PgPool::connect(&config.database_url)
        .await
        .context("error connecting to the database")?;
    info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("error running migrations")?;

    let router = api::router(PgStore::new(pool)).layer(api::cors(&config.cors_origin)?);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("error listening for the shutdown signal {e}");
    }
}
