use crate::modules::activities::core::{
    decision::{DecideError, Decision},
    events::{ActivityEvent, v1::participant_signed_up::ParticipantSignedUpV1},
    intents::ActivityIntent,
    state::ActivityState,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(state: &ActivityState, command: SignUpForActivity) -> Decision {
    match state {
        ActivityState::None => Decision::Rejected {
            reason: DecideError::ActivityNotFound,
        },
        scheduled if scheduled.is_signed_up(&command.email) => Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        },
        scheduled if scheduled.is_full() => Decision::Rejected {
            reason: DecideError::ActivityFull,
        },
        ActivityState::Scheduled { .. } => {
            let payload = ParticipantSignedUpV1 {
                activity_name: command.activity_name,
                email: command.email,
                occurred_at: command.signed_up_at,
            };
            Decision::Accepted {
                events: vec![ActivityEvent::ParticipantSignedUpV1(payload.clone())],
                intents: vec![ActivityIntent::PublishParticipantSignedUp { payload }],
            }
        }
    }
}
