use crate::modules::activities::core::{
    decision::{DecideError, Decision},
    events::{ActivityEvent, v1::participant_unregistered::ParticipantUnregisteredV1},
    intents::ActivityIntent,
    state::ActivityState,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(state: &ActivityState, command: UnregisterFromActivity) -> Decision {
    match state {
        ActivityState::None => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        scheduled if !scheduled.is_signed_up(&command.email) => Decision::Rejected {
            reason: DecideError::NotSignedUp,
        },
        ActivityState::Scheduled { .. } => {
            let payload = ParticipantUnregisteredV1 {
                activity_name: command.activity_name,
                email: command.email,
                occurred_at: command.unregistered_at,
            };
            Decision::Accepted {
                events: vec![ActivityEvent::ParticipantUnregisteredV1(payload.clone())],
                intents: vec![ActivityIntent::PublishParticipantUnregistered { payload }],
            }
        }
    }
}
