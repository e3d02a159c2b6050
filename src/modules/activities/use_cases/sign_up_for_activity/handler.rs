use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::use_cases::command_flow::run_command;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ActivityEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    max_attempts: u32,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> SignUpForActivityHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ActivityEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        max_attempts: u32,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            max_attempts,
            event_store,
            outbox,
        }
    }

    /// Returns the stream id and the version the sign-up was written at.
    pub async fn handle(
        &self,
        command: SignUpForActivity,
    ) -> Result<(String, i64), ApplicationError> {
        let stream_id = stream_id_for(&command.activity_name);
        let version = run_command(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            self.max_attempts,
            |state| decide_sign_up(state, command.clone()),
        )
        .await?;
        Ok((stream_id, version))
    }
}
