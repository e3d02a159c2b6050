use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::use_cases::command_flow::run_command;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::schedule_activity::command::ScheduleActivity;
use crate::modules::activities::use_cases::schedule_activity::decide::decide_schedule;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct ScheduleActivityHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ActivityEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> ScheduleActivityHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ActivityEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    /// Returns the id of the stream the activity was scheduled on.
    pub async fn handle(&self, command: ScheduleActivity) -> Result<String, ApplicationError> {
        let stream_id = stream_id_for(&command.activity_name);
        // Two attempts: a lost race replays into AlreadyScheduled.
        run_command(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            2,
            |state| decide_schedule(state, command.clone()),
        )
        .await?;
        Ok(stream_id)
    }
}
