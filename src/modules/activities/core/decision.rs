use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::intents::ActivityIntent;

/// Rejections carry the exact text shown to API clients.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum DecideError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Activity name is required")]
    MissingName,

    #[error("Activity already exists")]
    AlreadyScheduled,

    #[error("Maximum participants must be greater than zero")]
    InvalidCapacity,

    #[error("Initial participants exceed maximum participants")]
    OverCapacity,

    #[error("Duplicate participant in initial roster")]
    DuplicateParticipant,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

pub enum Decision {
    Accepted {
        events: Vec<ActivityEvent>,
        intents: Vec<ActivityIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
