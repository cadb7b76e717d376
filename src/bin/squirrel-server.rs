//! squirrel-server HTTP API server.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tower_http::trace::TraceLayer;

use squirrel_server::server::{AppState, Config, init_logging, router};

/// squirrel-server HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "squirrel-server")]
#[command(about = "HTTP API server for the squirrels resource")]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "squirrel-server.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::from_file(&args.config)?;
    init_logging(&config.logging)?;

    tracing::info!(
        path = %config.store.path,
        id_policy = %config.store.id_policy,
        "Opening squirrel store"
    );
    let state = AppState::from_config(&config)?;

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr().parse()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
