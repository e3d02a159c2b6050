use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::use_cases::list_activities::projection::ActivityRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(ActivityRow),
    AddParticipant {
        activity_name: String,
        email: String,
        version: i64,
        occurred_at: i64,
    },
    RemoveParticipant {
        activity_name: String,
        email: String,
        version: i64,
        occurred_at: i64,
    },
}

/// `version` is the stream version reached once `event` is applied.
pub fn apply(version: i64, event: &ActivityEvent) -> Vec<Mutation> {
    match event {
        ActivityEvent::ActivityScheduledV1(details) => vec![Mutation::Upsert(ActivityRow {
            activity_name: details.activity_name.clone(),
            description: details.description.clone(),
            schedule: details.schedule.clone(),
            max_participants: details.max_participants,
            participants: details
                .participants
                .iter()
                .map(|p| p.to_string())
                .collect(),
            scheduled_at: details.occurred_at,
            updated_at: details.occurred_at,
            version,
        })],
        ActivityEvent::ParticipantSignedUpV1(details) => vec![Mutation::AddParticipant {
            activity_name: details.activity_name.clone(),
            email: details.email.to_string(),
            version,
            occurred_at: details.occurred_at,
        }],
        ActivityEvent::ParticipantUnregisteredV1(details) => vec![Mutation::RemoveParticipant {
            activity_name: details.activity_name.clone(),
            email: details.email.to_string(),
            version,
            occurred_at: details.occurred_at,
        }],
    }
}
