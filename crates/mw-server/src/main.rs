use anyhow::Context;
use mw_core::MedWriterConfig;
use mw_server::{app_with_state, state::AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => MedWriterConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => MedWriterConfig::default(),
    };
    if let Ok(port) = std::env::var("MW_PORT") {
        config.server.port = port.parse().context("MW_PORT must be a port number")?;
        config.validate()?;
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Med Writer text service listening on {}", addr);

    axum::serve(listener, app_with_state(AppState::new(config))).await?;
    Ok(())
}
