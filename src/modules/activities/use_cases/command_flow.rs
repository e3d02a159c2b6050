use crate::modules::activities::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;

/// Load, fold, decide, append and dispatch for one activity stream.
///
/// A version conflict on append means another command touched the stream
/// between our load and our append, so the whole cycle runs again against the
/// fresh state, up to `max_attempts` times. Returns the stream version reached.
pub async fn run_command<TEventStore, TOutbox, F>(
    event_store: &TEventStore,
    outbox: &TOutbox,
    topic: &str,
    stream_id: &str,
    max_attempts: u32,
    mut decide: F,
) -> Result<i64, ApplicationError>
where
    TEventStore: EventStore<ActivityEvent> + ?Sized,
    TOutbox: DomainOutbox,
    F: FnMut(&ActivityState) -> Decision + Send,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1;
    loop {
        let stream = event_store.load(stream_id).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ActivityState::None, evolve);

        let (events, intents) = match decide(&state) {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        match event_store.append(stream_id, stream.version, &events).await {
            Ok(()) => {
                let version = stream.version + events.len() as i64;
                // The events are committed; an enqueue failure is logged, not returned.
                if let Err(e) =
                    dispatch_intents(outbox, stream_id, stream.version, topic, intents).await
                {
                    tracing::error!(
                        stream_id,
                        version,
                        error = %e,
                        "failed to enqueue integration events"
                    );
                }
                return Ok(version);
            }
            Err(EventStoreError::VersionMismatch { expected, actual })
                if attempt < max_attempts =>
            {
                tracing::debug!(
                    stream_id,
                    attempt,
                    expected,
                    actual,
                    "version conflict, retrying command"
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
