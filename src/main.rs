// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use tokio::net::TcpListener;
use tracing::{error, info};

use transfer_ops::{
    api::router,
    config::{ConfigError, NodeConfig, ServerConfig},
    state::AppState,
    telemetry::{self, LogFormat},
};

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    telemetry::init(LogFormat::from_env());

    if let Err(e) = run().await {
        error!(error = %e, "lock-balance-api stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let node = NodeConfig::from_env()?;
    let server = ServerConfig::from_env()?;
    info!(rpc_url = %node.rpc_url, "Full node configured");

    let app = router(AppState::new(node));
    let listener = TcpListener::bind(server.addr).await?;

    info!(addr = %server.addr, "Lock balance API listening (docs at /docs)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Lock balance API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
