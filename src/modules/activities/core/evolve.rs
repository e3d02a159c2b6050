use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::state::ActivityState;

pub fn evolve(state: ActivityState, event: ActivityEvent) -> ActivityState {
    match (state, event) {
        (ActivityState::None, ActivityEvent::ActivityScheduledV1(e)) => ActivityState::Scheduled {
            name: e.activity_name,
            description: e.description,
            schedule: e.schedule,
            max_participants: e.max_participants,
            participants: e.participants,
            scheduled_at: e.occurred_at,
        },
        (
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                mut participants,
                scheduled_at,
            },
            ActivityEvent::ParticipantSignedUpV1(e),
        ) => {
            if !participants.contains(&e.email) {
                participants.push(e.email);
            }
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                participants,
                scheduled_at,
            }
        }
        (
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                mut participants,
                scheduled_at,
            },
            ActivityEvent::ParticipantUnregisteredV1(e),
        ) => {
            participants.retain(|p| p != &e.email);
            ActivityState::Scheduled {
                name,
                description,
                schedule,
                max_participants,
                participants,
                scheduled_at,
            }
        }
        (state, _) => state,
    }
}
