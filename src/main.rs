//! chatlens server binary.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chatlens::config::Config;
use chatlens::server::{build_state, start_server};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    init_tracing(&config.service.log_level);

    info!(service = %config.service.name, "starting chatlens");

    let state = build_state(
        Path::new(&config.storage.upload_dir),
        Path::new(&config.storage.feedback_db),
    )
    .context("failed to initialize stores")?;

    start_server(state, &config.bind_addr(), shutdown_signal()).await?;

    info!("chatlens stopped");
    Ok(())
}

/// Initialize tracing with `RUST_LOG` taking precedence over the configured
/// level.
fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

/// Wait for shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("received Ctrl+C");
        }
        () = terminate => {
            info!("received SIGTERM");
        }
    }
}
