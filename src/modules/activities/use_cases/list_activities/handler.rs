use crate::modules::activities::adapters::outbound::projections::{
    ActivityProjectionRepository, WatermarkRepository,
};
use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::core::projections::{Mutation, apply};
use crate::shared::infrastructure::event_store::LoadedStream;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: ActivityProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
    gate: Mutex<()>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: ActivityProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
            gate: Mutex::new(()),
        }
    }

    /// `version` is the stream version reached by applying `event`.
    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &ActivityEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::AddParticipant {
                    activity_name,
                    email,
                    version,
                    occurred_at,
                } => {
                    self.repository
                        .add_participant(&activity_name, &email, version, occurred_at)
                        .await?
                }
                Mutation::RemoveParticipant {
                    activity_name,
                    email,
                    version,
                    occurred_at,
                } => {
                    self.repository
                        .remove_participant(&activity_name, &email, version, occurred_at)
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    /// Applies every event of `stream` the read model has not seen yet, in
    /// stream order. Concurrent catch-ups are serialised so a slow caller can
    /// never apply an older event after a newer one.
    pub async fn catch_up(
        &self,
        activity_name: &str,
        stream: &LoadedStream<ActivityEvent>,
    ) -> anyhow::Result<i64> {
        let _gate = self.gate.lock().await;
        let stream_id = stream_id_for(activity_name);
        let projected = self
            .repository
            .version_of(activity_name)
            .await?
            .unwrap_or(0);
        let mut applied = 0;
        for (index, event) in stream.events.iter().enumerate().skip(projected as usize) {
            self.apply_one(&stream_id, index as i64 + 1, event).await?;
            applied += 1;
        }
        tracing::debug!(stream_id = %stream_id, projected, applied, "projection caught up");
        Ok(projected.max(stream.version))
    }
}
