use crate::modules::activities::core::intents::ActivityIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::Serialize;
use uuid::Uuid;

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<ActivityIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            ActivityIntent::PublishActivityScheduled { payload } => make_row(
                topic,
                "ActivityScheduled",
                stream_id,
                stream_version,
                payload.occurred_at,
                &payload,
            )?,
            ActivityIntent::PublishParticipantSignedUp { payload } => make_row(
                topic,
                "ParticipantSignedUp",
                stream_id,
                stream_version,
                payload.occurred_at,
                &payload,
            )?,
            ActivityIntent::PublishParticipantUnregistered { payload } => make_row(
                topic,
                "ParticipantUnregistered",
                stream_id,
                stream_version,
                payload.occurred_at,
                &payload,
            )?,
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}

fn make_row(
    topic: &str,
    event_type: &str,
    stream_id: &str,
    stream_version: i64,
    occurred_at: i64,
    payload: &impl Serialize,
) -> Result<OutboxRow, OutboxError> {
    Ok(OutboxRow {
        message_id: Uuid::now_v7().to_string(),
        topic: topic.to_string(),
        event_type: event_type.to_string(),
        event_version: 1,
        stream_id: stream_id.to_string(),
        stream_version,
        occurred_at,
        payload: serde_json::to_value(payload)
            .map_err(|e| OutboxError::Validation(e.to_string()))?,
    })
}
