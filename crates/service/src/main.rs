use std::{net::SocketAddr, sync::Arc};

use clap::{Parser, Subcommand};
use packwise_api_server::{create_listener, run_server, ApiState};
use packwise_packs::PackStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

mod config;

#[derive(Debug, Parser, Clone)]
pub struct PackwiseCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Commands {
    #[command(name = "start")]
    Start {},
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let cli = PackwiseCli::try_parse()?;
    let config = config::load()?;

    match cli.command {
        Commands::Start {} => start(config).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn start(config: ServiceConfig) -> eyre::Result<()> {
    let addr: SocketAddr = format!("{}:{}", &config.bind_addr, &config.bind_port).parse()?;
    let listener = create_listener(addr)?;

    let state = ApiState::new(Arc::new(PackStore::new()));
    info!(%addr, "Starting pack calculation service");

    let server = run_server(state, listener);
    let handle = server.handle();
    let mut server = tokio::spawn(server);

    tokio::select! {
        res = &mut server => res??,
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping server");
            handle.stop(true).await;
            server.await??;
        }
    }

    Ok(())
}
