use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use sapper_core::SaveOnLargeChanges;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::service::GameService;

mod api;
mod error;
mod service;
mod store;
mod validate;

/// Turn-based minesweeper HTTP service.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Opened-cell count above which a flood-fill turn gets checkpointed.
    #[arg(long, default_value_t = SaveOnLargeChanges::DEFAULT_THRESHOLD)]
    snapshot_threshold: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let service = GameService::new(SaveOnLargeChanges::new(args.snapshot_threshold));
    let app = api::router(service);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("listening on {}", args.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
