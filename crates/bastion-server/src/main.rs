use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::sync::{mpsc, watch};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bastion_core::config::GameConfig;
use bastion_core::constants::COMMAND_CHANNEL_CAPACITY;
use bastion_server::game_loop::run_game_loop;
use bastion_server::hub::{Hub, CLIENT_BUFFER_CAPACITY};
use bastion_server::routes::{build_router, AppState};
use bastion_sim::{SimConfig, SimulationEngine};

/// Tower-defence simulation server
#[derive(Parser, Debug)]
#[command(name = "bastion", version, about)]
struct Cli {
    /// Path to the JSON game configuration
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "BASTION_ADDR", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = GameConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(config = %cli.config.display(), seed, "configuration loaded");

    let hub = Arc::new(Hub::new(CLIENT_BUFFER_CAPACITY));
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let engine = SimulationEngine::new(config, SimConfig { seed });
    let game = tokio::spawn(run_game_loop(engine, hub.clone(), command_rx, async move {
        let _ = stop_rx.changed().await;
    }));

    let app = build_router(AppState {
        hub,
        commands: command_tx,
    });

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .with_context(|| format!("binding {}", cli.addr))?;
    info!(addr = %cli.addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    let _ = stop_tx.send(true);
    let engine = game.await.context("game loop panicked")?;
    info!(
        score = engine.world().score,
        breaches = engine.world().breach_count,
        escapes = engine.world().escaped_count,
        "shut down"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
