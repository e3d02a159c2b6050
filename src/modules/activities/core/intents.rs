use crate::modules::activities::core::events::v1::{
    activity_scheduled::ActivityScheduledV1, participant_signed_up::ParticipantSignedUpV1,
    participant_unregistered::ParticipantUnregisteredV1,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityIntent {
    PublishActivityScheduled { payload: ActivityScheduledV1 },
    PublishParticipantSignedUp { payload: ParticipantSignedUpV1 },
    PublishParticipantUnregistered { payload: ParticipantUnregisteredV1 },
}
