use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Drains the outbox once and publishes every row to the log. Returns how many
/// rows were relayed.
pub async fn relay_once(outbox: &impl DomainOutbox) -> Result<usize, OutboxError> {
    let rows = outbox.drain().await?;
    for row in &rows {
        tracing::info!(
            topic = %row.topic,
            event_type = %row.event_type,
            stream_id = %row.stream_id,
            stream_version = row.stream_version,
            message_id = %row.message_id,
            payload = %row.payload,
            "integration event relayed"
        );
    }
    Ok(rows.len())
}

pub fn spawn_outbox_relay<TOutbox>(
    outbox: Arc<TOutbox>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()>
where
    TOutbox: DomainOutbox + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match relay_once(&*outbox).await {
                        Ok(0) => {}
                        Ok(relayed) => tracing::debug!(relayed, "outbox relayed"),
                        Err(e) => tracing::warn!(error = %e, "outbox relay failed"),
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
        // Flush whatever was accepted before shutdown.
        if let Err(e) = relay_once(&*outbox).await {
            tracing::warn!(error = %e, "final outbox relay failed");
        }
        tracing::info!("outbox relay stopped");
    })
}
