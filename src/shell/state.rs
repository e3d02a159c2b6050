use crate::modules::activities::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::activities::core::events::{ActivityEvent, stream_id_for};
use crate::modules::activities::use_cases::list_activities::handler::Projector;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::schedule_activity::handler::ScheduleActivityHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::config::ActivitySettings;
use std::sync::Arc;

pub type ActivityEventStore = InMemoryEventStore<ActivityEvent>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub schedule_handler: Arc<ScheduleActivityHandler<ActivityEventStore, InMemoryDomainOutbox>>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<ActivityEventStore, InMemoryDomainOutbox>>,
    pub unregister_handler:
        Arc<UnregisterFromActivityHandler<ActivityEventStore, InMemoryDomainOutbox>>,
    pub event_store: Arc<ActivityEventStore>,
    pub outbox: Arc<InMemoryDomainOutbox>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
}

impl AppState {
    pub fn new(
        event_store: ActivityEventStore,
        projections: InMemoryProjections,
        settings: &ActivitySettings,
    ) -> Self {
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(projections);
        let projector = Arc::new(Projector::new(
            "activity_catalog",
            projections.clone(),
            projections.clone(),
        ));
        Self {
            queries: projections,
            schedule_handler: Arc::new(ScheduleActivityHandler::new(
                settings.topic.clone(),
                event_store.clone(),
                outbox.clone(),
            )),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(
                settings.topic.clone(),
                settings.max_attempts,
                event_store.clone(),
                outbox.clone(),
            )),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(
                settings.topic.clone(),
                settings.max_attempts,
                event_store.clone(),
                outbox.clone(),
            )),
            event_store,
            outbox,
            projector,
        }
    }

    pub fn in_memory(settings: &ActivitySettings) -> Self {
        Self::new(
            ActivityEventStore::new(),
            InMemoryProjections::new(),
            settings,
        )
    }

    /// Brings the read model of one activity up to date with its stream.
    pub async fn project(&self, activity_name: &str) -> anyhow::Result<i64> {
        let stream = self.event_store.load(&stream_id_for(activity_name)).await?;
        self.projector.catch_up(activity_name, &stream).await
    }
}
