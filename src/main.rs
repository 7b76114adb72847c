mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::manager::ServerDataManager, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let data = Arc::new(ServerDataManager::load(&config.data_dir).await?);

    let mut client = bot::start::init_bot(&config, data.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            return;
        }
        tracing::info!("Shutting down");
        shard_manager.shutdown_all().await;
    });

    let result = bot::start::start_bot(&mut client).await;

    // Flush regardless of how the client exited.
    data.flush().await;
    tracing::info!("Server data flushed");

    result
}
