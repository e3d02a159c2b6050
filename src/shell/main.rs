use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::shell::config::Settings;
use mergington_activities::shell::http::router;
use mergington_activities::shell::seed::{load_catalog, seed_catalog};
use mergington_activities::shell::state::AppState;
use mergington_activities::shell::workers::spawn_outbox_relay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let settings = Settings::new().context("failed to load settings")?;

    // In-memory deps for now
    let state = AppState::in_memory(&settings.activities);
    let catalog = load_catalog(&settings.activities)?;
    let seeded = seed_catalog(&state, catalog).await?;
    tracing::info!(seeded, "activity catalog seeded");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let relay = spawn_outbox_relay(
        state.outbox.clone(),
        Duration::from_millis(settings.outbox.relay_interval_ms),
        shutdown_rx,
    );

    let app = router(state, &settings.server.static_dir);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server.host/server.port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Activities API: http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tx.send(true).ok();
    relay.await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
