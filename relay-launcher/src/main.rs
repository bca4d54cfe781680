mod cli;

use axum::Router;
use backend::{AppState, RelayConfig};
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
    let cli = cli::Cli::parse();

    let config = RelayConfig::default()
        .with_api_key(cli.api_key)
        .with_api_base(cli.api_base)
        .with_model(cli.model)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    tracing::info!(
        "Upstream model {} via {} (timeout {:?})",
        config.model,
        config.api_base,
        config.timeout
    );
    let state = AppState::from_config(&config)?;

    let addr = SocketAddr::new(cli.host, cli.port);
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let router = backend::init(Router::new(), state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
